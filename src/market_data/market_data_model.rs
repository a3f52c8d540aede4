use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::decimal_serde::*;

/// Latest quote for one symbol as reported by a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    #[serde(with = "decimal_serde")]
    pub price: Decimal,
    #[serde(with = "decimal_serde")]
    pub change: Decimal,
    #[serde(with = "decimal_serde")]
    pub change_percent: Decimal,
    pub currency: String,
    pub name: String,
    pub timestamp: DateTime<Utc>,
}

/// One symbol search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummary {
    pub ticker: String,
    pub name: String,
    pub quote_type: String,
    pub exchange: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MarketStatus {
    Open,
    Closed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketIndex {
    #[serde(with = "decimal_serde")]
    pub value: Decimal,
    #[serde(with = "decimal_serde")]
    pub change: Decimal,
    #[serde(with = "decimal_serde")]
    pub change_percent: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketIndices {
    pub sp500: MarketIndex,
    pub nasdaq: MarketIndex,
    pub dow: MarketIndex,
}

/// Broad-market view polled by the surrounding shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    pub as_of: DateTime<Utc>,
    pub status: MarketStatus,
    pub indices: MarketIndices,
}

/// Outcome of one fetch in a bulk price refresh; on a failed fetch the price
/// carries the position's existing price.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceUpdate {
    pub position_id: String,
    #[serde(with = "decimal_serde")]
    pub price: Decimal,
}
