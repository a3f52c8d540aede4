use chrono::NaiveDate;
use rust_decimal_macros::dec;

use crate::holdings::{AssetClass, Position};
use crate::ledger::{TradeAction, TradeRecord};

fn position(
    id: &str,
    ticker: &str,
    name: &str,
    asset_class: AssetClass,
    quantity: rust_decimal::Decimal,
    current_price: rust_decimal::Decimal,
    average_cost: rust_decimal::Decimal,
    base_currency: &str,
) -> Position {
    Position {
        id: id.to_string(),
        ticker: ticker.to_string(),
        name: name.to_string(),
        asset_class,
        quantity,
        current_price,
        average_cost,
        base_currency: base_currency.to_string(),
    }
}

/// Demo portfolio used by scenario tests and demo callers.
pub fn sample_positions() -> Vec<Position> {
    use AssetClass::*;
    vec![
        position("POS-AAPL", "AAPL", "Apple Inc.", Equity, dec!(150), dec!(185.20), dec!(180.00), "USD"),
        position("POS-MSFT", "MSFT", "Microsoft Corp.", Equity, dec!(100), dec!(378.85), dec!(365.00), "USD"),
        position("POS-GOOGL", "GOOGL", "Alphabet Inc.", Equity, dec!(50), dec!(142.56), dec!(135.00), "USD"),
        position("POS-TSLA", "TSLA", "Tesla Inc.", Equity, dec!(25), dec!(248.50), dec!(220.00), "USD"),
        position("POS-NVDA", "NVDA", "NVIDIA Corp.", Equity, dec!(75), dec!(195.40), dec!(180.00), "USD"),
        position("POS-TLT", "TLT", "iShares 20+ Year Bond ETF", Bond, dec!(500), dec!(95.40), dec!(98.00), "USD"),
        position("POS-VGIT", "VGIT", "Vanguard Intermediate Bond ETF", Bond, dec!(800), dec!(62.15), dec!(64.00), "USD"),
        position("POS-HYG", "HYG", "iShares High Yield Bond ETF", Bond, dec!(300), dec!(78.90), dec!(80.50), "USD"),
        position("POS-BTC", "BTC", "Bitcoin", Cryptocurrency, dec!(0.5), dec!(67500.00), dec!(55000.00), "USD"),
        position("POS-ETH", "ETH", "Ethereum", Cryptocurrency, dec!(4.2), dec!(3850.00), dec!(3200.00), "USD"),
        position("POS-USD-CASH", "USD-CASH", "US Dollar Cash", Cash, dec!(15000), dec!(1.00), dec!(1.00), "USD"),
        position("POS-EUR-CASH", "EUR-CASH", "Euro Cash", Cash, dec!(8000), dec!(1.09), dec!(1.09), "EUR"),
        position("POS-PLN-CASH", "PLN-CASH", "Polish Zloty Cash", Cash, dec!(20000), dec!(0.25), dec!(0.25), "PLN"),
    ]
}

/// Ledger matching the sample positions, newest entry first.
pub fn sample_ledger() -> Vec<TradeRecord> {
    vec![
        TradeRecord {
            id: "TRD-2".to_string(),
            action: TradeAction::Buy,
            ticker: "MSFT".to_string(),
            quantity: dec!(100),
            execution_price: dec!(365.00),
            trade_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            trade_value: dec!(36500),
        },
        TradeRecord {
            id: "TRD-1".to_string(),
            action: TradeAction::Buy,
            ticker: "AAPL".to_string(),
            quantity: dec!(150),
            execution_price: dec!(180.00),
            trade_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            trade_value: dec!(27000),
        },
        TradeRecord {
            id: "TRD-0".to_string(),
            action: TradeAction::Deposit,
            ticker: "USD-CASH".to_string(),
            quantity: dec!(15000),
            execution_price: dec!(1.00),
            trade_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            trade_value: dec!(15000),
        },
    ]
}
