use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

use crate::fx::CurrencyConverter;
use crate::holdings::{AssetClass, Position};

use super::valuation_model::{AllocationEntry, PortfolioMetrics};

/// Derives portfolio value, cost basis, unrealized gain and per-class
/// allocation from the position set. Pure recomputation on every read, no
/// cached derived state.
pub struct ValuationEngine {
    converter: Arc<CurrencyConverter>,
}

impl ValuationEngine {
    pub fn new(converter: Arc<CurrencyConverter>) -> Self {
        Self { converter }
    }

    pub fn valuate(&self, positions: &[Position]) -> PortfolioMetrics {
        let mut total_value = Decimal::ZERO;
        let mut total_cost = Decimal::ZERO;
        // Allocation buckets keep first-seen asset-class order.
        let mut class_order: Vec<AssetClass> = Vec::new();
        let mut class_values: HashMap<AssetClass, Decimal> = HashMap::new();

        for position in positions {
            let value = self
                .converter
                .to_usd(position.market_value(), &position.base_currency);
            let cost = self
                .converter
                .to_usd(position.cost_basis(), &position.base_currency);

            total_value += value;
            total_cost += cost;

            if !class_values.contains_key(&position.asset_class) {
                class_order.push(position.asset_class);
            }
            *class_values.entry(position.asset_class).or_insert(Decimal::ZERO) += value;
        }

        let unrealized_gain = total_value - total_cost;
        let unrealized_gain_percent = if total_cost.is_zero() {
            Decimal::ZERO
        } else {
            unrealized_gain / total_cost * Decimal::ONE_HUNDRED
        };

        let allocation = class_order
            .iter()
            .map(|class| {
                let market_value = class_values[class];
                let percentage = if total_value.is_zero() {
                    Decimal::ZERO
                } else {
                    market_value / total_value * Decimal::ONE_HUNDRED
                };
                AllocationEntry {
                    category: class.label().to_string(),
                    percentage,
                    market_value,
                    theme_color: class.theme_color().to_string(),
                }
            })
            .collect();

        PortfolioMetrics {
            total_value,
            total_cost,
            unrealized_gain,
            unrealized_gain_percent,
            allocation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn position(
        ticker: &str,
        class: AssetClass,
        quantity: Decimal,
        price: Decimal,
        cost: Decimal,
        currency: &str,
    ) -> Position {
        Position {
            id: format!("POS-{}", ticker),
            ticker: ticker.to_string(),
            name: ticker.to_string(),
            asset_class: class,
            quantity,
            current_price: price,
            average_cost: cost,
            base_currency: currency.to_string(),
        }
    }

    fn engine() -> ValuationEngine {
        ValuationEngine::new(Arc::new(CurrencyConverter::new()))
    }

    #[test]
    fn test_totals_and_gain() {
        let positions = vec![
            position("AAPL", AssetClass::Equity, dec!(10), dec!(150), dec!(100), "USD"),
            position("TLT", AssetClass::Bond, dec!(100), dec!(95), dec!(98), "USD"),
        ];

        let metrics = engine().valuate(&positions);
        assert_eq!(metrics.total_value, dec!(11000));
        assert_eq!(metrics.total_cost, dec!(10800));
        assert_eq!(metrics.unrealized_gain, dec!(200));
    }

    #[test]
    fn test_multi_currency_positions_normalize_to_usd() {
        let positions = vec![position(
            "EUR-CASH",
            AssetClass::Cash,
            dec!(1000),
            dec!(1.09),
            dec!(1.09),
            "EUR",
        )];

        let metrics = engine().valuate(&positions);
        // 1000 * 1.09 EUR, converted at 1.09
        assert_eq!(metrics.total_value, dec!(1188.1000));
    }

    #[test]
    fn test_allocation_percentages_sum_to_hundred() {
        let positions = vec![
            position("AAPL", AssetClass::Equity, dec!(10), dec!(100), dec!(90), "USD"),
            position("BTC", AssetClass::Cryptocurrency, dec!(1), dec!(500), dec!(400), "USD"),
            position("USD-CASH", AssetClass::Cash, dec!(1500), dec!(1), dec!(1), "USD"),
        ];

        let metrics = engine().valuate(&positions);
        let sum: Decimal = metrics.allocation.iter().map(|a| a.percentage).sum();
        assert!((sum - Decimal::ONE_HUNDRED).abs() < dec!(0.000001));
    }

    #[test]
    fn test_allocation_keeps_first_seen_class_order() {
        let positions = vec![
            position("BTC", AssetClass::Cryptocurrency, dec!(1), dec!(100), dec!(100), "USD"),
            position("AAPL", AssetClass::Equity, dec!(1), dec!(100), dec!(100), "USD"),
            position("ETH", AssetClass::Cryptocurrency, dec!(1), dec!(100), dec!(100), "USD"),
        ];

        let metrics = engine().valuate(&positions);
        let categories: Vec<&str> = metrics.allocation.iter().map(|a| a.category.as_str()).collect();
        assert_eq!(categories, vec!["Cryptocurrency", "Equities"]);
        assert_eq!(metrics.allocation[0].market_value, dec!(200));
    }

    #[test]
    fn test_zero_cost_portfolio_has_zero_gain_percent() {
        let positions = vec![position(
            "FREE",
            AssetClass::Equity,
            dec!(10),
            dec!(5),
            dec!(0),
            "USD",
        )];

        let metrics = engine().valuate(&positions);
        assert_eq!(metrics.unrealized_gain_percent, Decimal::ZERO);
        assert_eq!(metrics.unrealized_gain, dec!(50));
    }

    #[test]
    fn test_zero_value_portfolio_has_zero_percentages() {
        let positions = vec![position(
            "ZERO",
            AssetClass::Equity,
            dec!(0),
            dec!(0),
            dec!(0),
            "USD",
        )];

        let metrics = engine().valuate(&positions);
        assert_eq!(metrics.total_value, Decimal::ZERO);
        assert_eq!(metrics.allocation.len(), 1);
        assert_eq!(metrics.allocation[0].percentage, Decimal::ZERO);
    }

    #[test]
    fn test_empty_position_set() {
        let metrics = engine().valuate(&[]);
        assert_eq!(metrics.total_value, Decimal::ZERO);
        assert_eq!(metrics.unrealized_gain_percent, Decimal::ZERO);
        assert!(metrics.allocation.is_empty());
    }
}
