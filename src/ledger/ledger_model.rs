use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::decimal_serde::*;

/// Kind of portfolio-affecting action a ledger entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeAction {
    Buy,
    Sell,
    Deposit,
    Add,
}

impl TradeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeAction::Buy => "buy",
            TradeAction::Sell => "sell",
            TradeAction::Deposit => "deposit",
            TradeAction::Add => "add",
        }
    }
}

/// Immutable, append-only ledger entry. The trade value is quantity times
/// execution price, in the instrument's base currency at execution time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    pub id: String,
    pub action: TradeAction,
    pub ticker: String,
    #[serde(with = "decimal_serde")]
    pub quantity: Decimal,
    #[serde(with = "decimal_serde")]
    pub execution_price: Decimal,
    pub trade_date: NaiveDate,
    #[serde(with = "decimal_serde")]
    pub trade_value: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_trade_record_serializes_iso_date() {
        let record = TradeRecord {
            id: "TRD-1".to_string(),
            action: TradeAction::Buy,
            ticker: "AAPL".to_string(),
            quantity: dec!(150),
            execution_price: dec!(180.00),
            trade_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            trade_value: dec!(27000),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["tradeDate"], "2024-01-15");
        assert_eq!(json["action"], "buy");
        assert_eq!(json["tradeValue"], "27000");
    }
}
