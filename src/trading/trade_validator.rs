use rust_decimal::Decimal;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::holdings::Position;

use super::trading_errors::TradeError;

/// Pre-mutation checks for buy affordability and sell feasibility.
pub struct TradeValidator;

impl TradeValidator {
    /// Strict affordability against available USD liquidity, no fee buffer.
    pub fn can_afford(quantity: Decimal, price: Decimal, available_usd: Decimal) -> bool {
        quantity * price <= available_usd
    }

    /// A sell is feasible when the ticker is held (case-insensitive) with at
    /// least the requested quantity; selling the full holding is allowed.
    pub fn can_sell(
        ticker: &str,
        quantity: Decimal,
        positions: &[Position],
    ) -> Result<(), TradeError> {
        let position = positions
            .iter()
            .find(|p| p.matches_ticker(ticker))
            .ok_or(TradeError::NotOwned)?;

        if position.quantity < quantity {
            return Err(TradeError::InsufficientHoldings {
                held: position.quantity,
            });
        }
        Ok(())
    }

    /// Advisory message shown while a sell form is being filled in. `None`
    /// when there is nothing to say yet.
    pub fn preview_sell(
        ticker: &str,
        quantity: Decimal,
        positions: &[Position],
    ) -> Option<String> {
        if ticker.trim().is_empty() || quantity <= Decimal::ZERO {
            return None;
        }

        let position = match positions.iter().find(|p| p.matches_ticker(ticker)) {
            Some(position) => position,
            None => return Some("You do not own this asset".to_string()),
        };

        if position.quantity < quantity {
            return Some(format!(
                "You only own {} shares (trying to sell {})",
                position.quantity, quantity
            ));
        }
        if position.quantity == quantity {
            return Some("This will sell all your shares in this asset".to_string());
        }
        Some(format!(
            "You will have {} shares remaining",
            (position.quantity - quantity).round_dp(DISPLAY_DECIMAL_PRECISION)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holdings::AssetClass;
    use rust_decimal_macros::dec;

    fn holding(ticker: &str, quantity: Decimal) -> Position {
        Position {
            id: format!("POS-{}", ticker),
            ticker: ticker.to_string(),
            name: ticker.to_string(),
            asset_class: AssetClass::Equity,
            quantity,
            current_price: dec!(100),
            average_cost: dec!(90),
            base_currency: "USD".to_string(),
        }
    }

    #[test]
    fn test_can_afford_is_strict() {
        assert!(TradeValidator::can_afford(dec!(10), dec!(150), dec!(1500)));
        assert!(!TradeValidator::can_afford(dec!(10), dec!(150), dec!(1499.99)));
    }

    #[test]
    fn test_can_sell_unknown_ticker() {
        let positions = vec![holding("AAPL", dec!(10))];
        assert_eq!(
            TradeValidator::can_sell("MSFT", dec!(1), &positions),
            Err(TradeError::NotOwned)
        );
    }

    #[test]
    fn test_can_sell_is_case_insensitive() {
        let positions = vec![holding("AAPL", dec!(10))];
        assert!(TradeValidator::can_sell("aapl", dec!(5), &positions).is_ok());
    }

    #[test]
    fn test_can_sell_full_holding_is_allowed() {
        let positions = vec![holding("AAPL", dec!(10))];
        assert!(TradeValidator::can_sell("AAPL", dec!(10), &positions).is_ok());
        assert_eq!(
            TradeValidator::can_sell("AAPL", dec!(10.5), &positions),
            Err(TradeError::InsufficientHoldings { held: dec!(10) })
        );
    }

    #[test]
    fn test_preview_sell_messages() {
        let positions = vec![holding("MSFT", dec!(10))];

        assert_eq!(TradeValidator::preview_sell("", dec!(5), &positions), None);
        assert_eq!(
            TradeValidator::preview_sell("MSFT", dec!(12), &positions),
            Some("You only own 10 shares (trying to sell 12)".to_string())
        );
        assert_eq!(
            TradeValidator::preview_sell("MSFT", dec!(10), &positions),
            Some("This will sell all your shares in this asset".to_string())
        );
        assert_eq!(
            TradeValidator::preview_sell("MSFT", dec!(4), &positions),
            Some("You will have 6 shares remaining".to_string())
        );
    }
}
