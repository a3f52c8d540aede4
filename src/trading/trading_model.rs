use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::holdings::AssetClass;
use crate::market_data::QuoteSummary;
use crate::utils::decimal_serde::*;

use super::trading_errors::TradeError;

/// Direction of a trade order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

/// Asset identity resolved by the search collaborator; used when a buy opens
/// a brand-new position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetMetadata {
    pub name: String,
    pub asset_class: AssetClass,
}

impl From<&QuoteSummary> for AssetMetadata {
    fn from(summary: &QuoteSummary) -> Self {
        AssetMetadata {
            name: summary.name.clone(),
            // "etf" and other unknown types land on equity
            asset_class: AssetClass::from(summary.quote_type.as_str()),
        }
    }
}

/// Input model for a buy/sell command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeOrder {
    pub side: TradeSide,
    pub ticker: String,
    #[serde(with = "decimal_serde")]
    pub quantity: Decimal,
    #[serde(with = "decimal_serde")]
    pub price: Decimal,
    pub metadata: Option<AssetMetadata>,
}

impl TradeOrder {
    /// Validates the order fields before any state is touched.
    pub fn validate(&self) -> Result<(), TradeError> {
        if self.ticker.trim().is_empty() {
            return Err(TradeError::Validation(
                "All fields are required".to_string(),
            ));
        }
        if self.quantity <= Decimal::ZERO || self.price <= Decimal::ZERO {
            return Err(TradeError::Validation(
                "Quantity and price must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Input model for a cash deposit in a given currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRequest {
    pub currency: String,
    #[serde(with = "decimal_serde")]
    pub amount: Decimal,
}

impl DepositRequest {
    pub fn validate(&self) -> Result<(), TradeError> {
        if self.amount <= Decimal::ZERO {
            return Err(TradeError::Validation(
                "Please enter a valid amount".to_string(),
            ));
        }
        Ok(())
    }
}

/// Input model for manually onboarding a non-traded position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssetEntry {
    pub ticker: String,
    pub name: String,
    pub asset_class: AssetClass,
    #[serde(with = "decimal_serde")]
    pub quantity: Decimal,
    #[serde(with = "decimal_serde")]
    pub price: Decimal,
    pub date: NaiveDate,
    pub currency: String,
}

impl NewAssetEntry {
    pub fn validate(&self) -> Result<(), TradeError> {
        if self.ticker.trim().is_empty() || self.name.trim().is_empty() {
            return Err(TradeError::Validation(
                "All fields are required".to_string(),
            ));
        }
        if self.quantity <= Decimal::ZERO || self.price <= Decimal::ZERO {
            return Err(TradeError::Validation(
                "Quantity and price must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Direct override of quantity and price on an existing position. Bypasses
/// trade validation and cash flow; malformed edits are silently dropped by
/// the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionEdit {
    pub position_id: String,
    #[serde(with = "decimal_serde")]
    pub quantity: Decimal,
    #[serde(with = "decimal_serde")]
    pub price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_order_requires_ticker() {
        let order = TradeOrder {
            side: TradeSide::Buy,
            ticker: "  ".to_string(),
            quantity: dec!(1),
            price: dec!(10),
            metadata: None,
        };
        assert_eq!(
            order.validate(),
            Err(TradeError::Validation("All fields are required".to_string()))
        );
    }

    #[test]
    fn test_order_rejects_non_positive_values() {
        let order = TradeOrder {
            side: TradeSide::Sell,
            ticker: "AAPL".to_string(),
            quantity: dec!(0),
            price: dec!(10),
            metadata: None,
        };
        assert_eq!(
            order.validate(),
            Err(TradeError::Validation(
                "Quantity and price must be positive".to_string()
            ))
        );
    }

    #[test]
    fn test_deposit_rejects_non_positive_amount() {
        let request = DepositRequest {
            currency: "EUR".to_string(),
            amount: dec!(-5),
        };
        assert_eq!(
            request.validate(),
            Err(TradeError::Validation("Please enter a valid amount".to_string()))
        );
    }

    #[test]
    fn test_metadata_from_summary_maps_etf_to_equity() {
        let summary = QuoteSummary {
            ticker: "SPY".to_string(),
            name: "SPDR S&P 500 ETF Trust".to_string(),
            quote_type: "etf".to_string(),
            exchange: "NYSE".to_string(),
        };
        let metadata = AssetMetadata::from(&summary);
        assert_eq!(metadata.asset_class, AssetClass::Equity);
        assert_eq!(metadata.name, "SPDR S&P 500 ETF Trust");
    }
}
