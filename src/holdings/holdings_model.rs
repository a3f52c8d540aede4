use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::decimal_serde::*;

/// Classification of a holding, used for allocation bucketing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Equity,
    Bond,
    Cryptocurrency,
    Cash,
}

impl AssetClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetClass::Equity => "equity",
            AssetClass::Bond => "bond",
            AssetClass::Cryptocurrency => "cryptocurrency",
            AssetClass::Cash => "cash",
        }
    }

    /// Category label shown on allocation entries.
    pub fn label(&self) -> &'static str {
        match self {
            AssetClass::Equity => "Equities",
            AssetClass::Bond => "Bonds",
            AssetClass::Cryptocurrency => "Cryptocurrency",
            AssetClass::Cash => "Cash",
        }
    }

    /// Display color of the allocation bucket.
    pub fn theme_color(&self) -> &'static str {
        match self {
            AssetClass::Equity => "#3B82F6",
            AssetClass::Bond => "#10B981",
            AssetClass::Cryptocurrency => "#F59E0B",
            AssetClass::Cash => "#6B7280",
        }
    }
}

impl From<&str> for AssetClass {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "bond" => AssetClass::Bond,
            "cryptocurrency" => AssetClass::Cryptocurrency,
            "cash" => AssetClass::Cash,
            _ => AssetClass::Equity,
        }
    }
}

/// One holding: a single instrument or a cash balance in one currency.
///
/// At most one position exists per ticker; the ticker is the unique matching
/// key for trades. Price and cost are denominated in `base_currency`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: String,
    pub ticker: String,
    pub name: String,
    pub asset_class: AssetClass,
    #[serde(with = "decimal_serde")]
    pub quantity: Decimal,
    #[serde(with = "decimal_serde")]
    pub current_price: Decimal,
    #[serde(with = "decimal_serde")]
    pub average_cost: Decimal,
    pub base_currency: String,
}

impl Position {
    /// Market value in the position's base currency.
    pub fn market_value(&self) -> Decimal {
        self.quantity * self.current_price
    }

    /// Acquisition cost in the position's base currency.
    pub fn cost_basis(&self) -> Decimal {
        self.quantity * self.average_cost
    }

    pub fn is_cash(&self) -> bool {
        self.asset_class == AssetClass::Cash
    }

    /// Ticker matching is case-insensitive.
    pub fn matches_ticker(&self, ticker: &str) -> bool {
        self.ticker.eq_ignore_ascii_case(ticker)
    }

    /// Folds a buy into the position: quantity summed, acquisition cost
    /// recomputed as the weighted average over the combined quantity, current
    /// price moved to the trade price.
    pub fn apply_buy(&mut self, quantity: Decimal, price: Decimal) {
        let new_quantity = self.quantity + quantity;
        if !new_quantity.is_zero() {
            self.average_cost =
                (self.quantity * self.average_cost + quantity * price) / new_quantity;
        }
        self.quantity = new_quantity;
        self.current_price = price;
    }

    /// Reduces the position by a sell; average cost is untouched, current
    /// price moves to the trade price. Returns the remaining quantity; at or
    /// below zero the caller removes the position.
    pub fn apply_sell(&mut self, quantity: Decimal, price: Decimal) -> Decimal {
        self.quantity -= quantity;
        self.current_price = price;
        self.quantity
    }
}
