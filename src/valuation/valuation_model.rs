use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::decimal_serde::*;

/// USD-equivalent exposure of one asset class. Derived on every valuation
/// read, never stored.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AllocationEntry {
    pub category: String,
    #[serde(with = "decimal_serde")]
    pub percentage: Decimal,
    #[serde(with = "decimal_serde")]
    pub market_value: Decimal,
    pub theme_color: String,
}

/// Aggregate valuation of the position set, in USD equivalents.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioMetrics {
    #[serde(with = "decimal_serde")]
    pub total_value: Decimal,
    #[serde(with = "decimal_serde")]
    pub total_cost: Decimal,
    #[serde(with = "decimal_serde")]
    pub unrealized_gain: Decimal,
    #[serde(with = "decimal_serde")]
    pub unrealized_gain_percent: Decimal,
    pub allocation: Vec<AllocationEntry>,
}
