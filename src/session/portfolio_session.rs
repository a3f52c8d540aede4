use chrono::Utc;
use log::{debug, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::constants::{CASH_TICKER_SUFFIX, USD_CASH_TICKER};
use crate::fx::CurrencyConverter;
use crate::holdings::{AssetClass, Position};
use crate::ledger::{TradeAction, TradeRecord};
use crate::market_data::PriceUpdate;
use crate::trading::{
    DepositRequest, NewAssetEntry, PositionEdit, TradeError, TradeOrder, TradeSide, TradeValidator,
};
use crate::valuation::{LiquidityCalculator, LiquiditySnapshot, PortfolioMetrics, ValuationEngine};

use super::id_generator::IdGenerator;
use super::sample_data;

/// JSON encoding of the session's source-of-truth state.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDocument {
    pub positions: Vec<Position>,
    pub ledger: Vec<TradeRecord>,
}

/// Owns the position set and the append-only trade ledger, and applies every
/// portfolio-affecting command as one atomic transition. All valuation,
/// allocation and liquidity figures are recomputed from the position list on
/// each read.
pub struct PortfolioSession {
    positions: Vec<Position>,
    // Newest entry first.
    ledger: Vec<TradeRecord>,
    converter: Arc<CurrencyConverter>,
    valuation: ValuationEngine,
    liquidity: LiquidityCalculator,
    ids: IdGenerator,
}

impl PortfolioSession {
    /// Empty session; a zero-balance USD cash position is created so buy
    /// debits always have somewhere to land.
    pub fn new() -> Self {
        Self::with_state(Vec::new(), Vec::new(), IdGenerator::default())
    }

    /// Session seeded with the demo portfolio.
    pub fn with_sample_data() -> Self {
        Self::with_state(
            sample_data::sample_positions(),
            sample_data::sample_ledger(),
            IdGenerator::default(),
        )
    }

    pub fn with_state(
        positions: Vec<Position>,
        ledger: Vec<TradeRecord>,
        ids: IdGenerator,
    ) -> Self {
        let converter = Arc::new(CurrencyConverter::new());
        let mut session = Self {
            positions,
            ledger,
            valuation: ValuationEngine::new(Arc::clone(&converter)),
            liquidity: LiquidityCalculator::new(Arc::clone(&converter)),
            converter,
            ids,
        };
        session.ensure_usd_cash();
        session
    }

    /// Restores a session from its JSON document encoding.
    pub fn from_document(document: PortfolioDocument) -> Self {
        Self::with_state(document.positions, document.ledger, IdGenerator::default())
    }

    pub fn from_json(json: &str) -> crate::Result<Self> {
        let document: PortfolioDocument = serde_json::from_str(json)?;
        Ok(Self::from_document(document))
    }

    pub fn to_document(&self) -> PortfolioDocument {
        PortfolioDocument {
            positions: self.positions.clone(),
            ledger: self.ledger.clone(),
        }
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(&self.to_document())?)
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Ledger entries, newest first.
    pub fn ledger(&self) -> &[TradeRecord] {
        &self.ledger
    }

    pub fn metrics(&self) -> PortfolioMetrics {
        self.valuation.valuate(&self.positions)
    }

    pub fn liquidity(&self) -> LiquiditySnapshot {
        self.liquidity.liquidity(&self.positions)
    }

    /// Executes a buy or sell: validate, then apply the position mutation,
    /// the USD cash flow and the ledger append as one transition. A rejected
    /// order leaves every piece of state untouched. Re-submitting an applied
    /// order is not idempotent; each call appends and mutates again.
    pub fn apply_trade(&mut self, order: TradeOrder) -> Result<TradeRecord, TradeError> {
        order.validate()?;

        match order.side {
            TradeSide::Buy => {
                let available = self.liquidity().total_usd;
                if !TradeValidator::can_afford(order.quantity, order.price, available) {
                    let required = order.quantity * order.price;
                    debug!(
                        "buy {} rejected: available {} < required {}",
                        order.ticker, available, required
                    );
                    return Err(TradeError::InsufficientFunds {
                        available,
                        required,
                    });
                }
            }
            TradeSide::Sell => {
                TradeValidator::can_sell(&order.ticker, order.quantity, &self.positions)?
            }
        }

        let ticker = order.ticker.to_uppercase();
        let trade_value = order.quantity * order.price;

        match order.side {
            TradeSide::Buy => {
                if let Some(position) =
                    self.positions.iter_mut().find(|p| p.matches_ticker(&ticker))
                {
                    position.apply_buy(order.quantity, order.price);
                } else {
                    let (name, asset_class) = match &order.metadata {
                        Some(meta) => (meta.name.clone(), meta.asset_class),
                        None => (format!("{} Holdings", ticker), AssetClass::Equity),
                    };
                    let id = self.ids.next_id();
                    self.positions.push(Position {
                        id,
                        ticker: ticker.clone(),
                        name,
                        asset_class,
                        quantity: order.quantity,
                        current_price: order.price,
                        average_cost: order.price,
                        base_currency: "USD".to_string(),
                    });
                }
                self.debit_usd_cash(trade_value);
            }
            TradeSide::Sell => {
                if let Some(index) = self
                    .positions
                    .iter()
                    .position(|p| p.matches_ticker(&ticker))
                {
                    let remaining =
                        self.positions[index].apply_sell(order.quantity, order.price);
                    if remaining <= Decimal::ZERO {
                        // No zero-quantity positions persist.
                        self.positions.remove(index);
                    }
                }
                self.credit_usd_cash(trade_value);
            }
        }

        let record = TradeRecord {
            id: self.ids.next_id(),
            action: match order.side {
                TradeSide::Buy => TradeAction::Buy,
                TradeSide::Sell => TradeAction::Sell,
            },
            ticker,
            quantity: order.quantity,
            execution_price: order.price,
            trade_date: Utc::now().date_naive(),
            trade_value,
        };
        self.ledger.insert(0, record.clone());
        Ok(record)
    }

    /// Credits (or creates) the cash position of the given currency, priced
    /// at the currency's USD rate, and records the deposit.
    pub fn apply_deposit(&mut self, request: DepositRequest) -> Result<TradeRecord, TradeError> {
        request.validate()?;

        let currency = request.currency.to_uppercase();
        let ticker = format!("{}{}", currency, CASH_TICKER_SUFFIX);
        let rate = self.converter.rate(&currency);

        if let Some(position) = self.positions.iter_mut().find(|p| p.ticker == ticker) {
            position.quantity += request.amount;
        } else {
            let id = self.ids.next_id();
            self.positions.push(Position {
                id,
                ticker: ticker.clone(),
                name: format!("{} Cash", currency),
                asset_class: AssetClass::Cash,
                quantity: request.amount,
                current_price: rate,
                average_cost: rate,
                base_currency: currency,
            });
        }

        let record = TradeRecord {
            id: self.ids.next_id(),
            action: TradeAction::Deposit,
            ticker,
            quantity: request.amount,
            execution_price: rate,
            trade_date: Utc::now().date_naive(),
            trade_value: request.amount * rate,
        };
        self.ledger.insert(0, record.clone());
        Ok(record)
    }

    /// Adds a brand-new, non-traded position. Unlike a buy, this never merges
    /// with an existing ticker and moves no cash.
    pub fn apply_onboard(&mut self, entry: NewAssetEntry) -> Result<TradeRecord, TradeError> {
        entry.validate()?;

        let ticker = entry.ticker.to_uppercase();
        let id = self.ids.next_id();
        self.positions.push(Position {
            id,
            ticker: ticker.clone(),
            name: entry.name,
            asset_class: entry.asset_class,
            quantity: entry.quantity,
            current_price: entry.price,
            average_cost: entry.price,
            base_currency: entry.currency,
        });

        let record = TradeRecord {
            id: self.ids.next_id(),
            action: TradeAction::Add,
            ticker,
            quantity: entry.quantity,
            execution_price: entry.price,
            trade_date: entry.date,
            trade_value: entry.quantity * entry.price,
        };
        self.ledger.insert(0, record.clone());
        Ok(record)
    }

    /// Out-of-band correction of quantity and current price. Malformed input
    /// is dropped without an error; average cost and class stay untouched and
    /// no ledger entry is written.
    pub fn apply_edit(&mut self, edit: PositionEdit) {
        if edit.quantity <= Decimal::ZERO || edit.price <= Decimal::ZERO {
            debug!("edit of position {} discarded: non-positive values", edit.position_id);
            return;
        }
        match self.positions.iter_mut().find(|p| p.id == edit.position_id) {
            Some(position) => {
                position.quantity = edit.quantity;
                position.current_price = edit.price;
            }
            None => debug!("edit of unknown position {} discarded", edit.position_id),
        }
    }

    /// Explicit removal by the user; no ledger entry.
    pub fn remove_position(&mut self, id: &str) {
        self.positions.retain(|p| p.id != id);
    }

    /// Applies a batch of refreshed prices. Cash positions are never
    /// repriced.
    pub fn apply_price_updates(&mut self, updates: &[PriceUpdate]) {
        for update in updates {
            if let Some(position) = self
                .positions
                .iter_mut()
                .find(|p| p.id == update.position_id && !p.is_cash())
            {
                position.current_price = update.price;
            }
        }
    }

    /// A USD cash position always exists, so a fresh session cannot lose a
    /// buy debit. A user who explicitly removes it re-opts into the historical
    /// skip-the-debit behavior.
    fn ensure_usd_cash(&mut self) {
        if self.positions.iter().any(|p| p.ticker == USD_CASH_TICKER) {
            return;
        }
        let id = self.ids.next_id();
        self.positions.push(Position {
            id,
            ticker: USD_CASH_TICKER.to_string(),
            name: "US Dollar Cash".to_string(),
            asset_class: AssetClass::Cash,
            quantity: Decimal::ZERO,
            current_price: Decimal::ONE,
            average_cost: Decimal::ONE,
            base_currency: "USD".to_string(),
        });
    }

    fn debit_usd_cash(&mut self, amount: Decimal) {
        match self
            .positions
            .iter_mut()
            .find(|p| p.ticker == USD_CASH_TICKER)
        {
            Some(cash) => cash.quantity -= amount,
            None => warn!("no {} position, debit of {} skipped", USD_CASH_TICKER, amount),
        }
    }

    fn credit_usd_cash(&mut self, amount: Decimal) {
        if let Some(cash) = self
            .positions
            .iter_mut()
            .find(|p| p.ticker == USD_CASH_TICKER)
        {
            cash.quantity += amount;
            return;
        }
        let id = self.ids.next_id();
        self.positions.push(Position {
            id,
            ticker: USD_CASH_TICKER.to_string(),
            name: "US Dollar Cash".to_string(),
            asset_class: AssetClass::Cash,
            quantity: amount,
            current_price: Decimal::ONE,
            average_cost: Decimal::ONE,
            base_currency: "USD".to_string(),
        });
    }
}

impl Default for PortfolioSession {
    fn default() -> Self {
        Self::new()
    }
}
