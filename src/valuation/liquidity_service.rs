use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::fx::CurrencyConverter;
use crate::holdings::Position;
use crate::utils::decimal_serde::*;

/// Cash view of the portfolio: USD-equivalent total plus the per-currency
/// cash positions in insertion order.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LiquiditySnapshot {
    #[serde(with = "decimal_serde")]
    pub total_usd: Decimal,
    pub cash_positions: Vec<Position>,
}

/// Derives available liquidity from the cash-class positions. The quantity of
/// a cash position is its balance; its price is the currency's USD rate.
pub struct LiquidityCalculator {
    converter: Arc<CurrencyConverter>,
}

impl LiquidityCalculator {
    pub fn new(converter: Arc<CurrencyConverter>) -> Self {
        Self { converter }
    }

    pub fn liquidity(&self, positions: &[Position]) -> LiquiditySnapshot {
        let cash_positions: Vec<Position> = positions
            .iter()
            .filter(|p| p.is_cash())
            .cloned()
            .collect();

        let total_usd = cash_positions
            .iter()
            .map(|cash| self.converter.to_usd(cash.quantity, &cash.base_currency))
            .sum();

        LiquiditySnapshot {
            total_usd,
            cash_positions,
        }
    }
}
