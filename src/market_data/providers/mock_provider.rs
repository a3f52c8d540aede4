use async_trait::async_trait;
use chrono::Utc;
use lazy_static::lazy_static;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

use crate::constants::SEARCH_RESULT_LIMIT;
use crate::market_data::market_data_errors::MarketDataError;
use crate::market_data::market_data_model::{
    MarketIndex, MarketIndices, MarketSnapshot, MarketStatus, Quote, QuoteSummary,
};
use crate::market_data::market_data_provider::MarketDataProvider;

lazy_static! {
    // (price, change, change percent)
    static ref MOCK_PRICES: HashMap<&'static str, (Decimal, Decimal, Decimal)> = HashMap::from([
        ("AAPL", (dec!(185.20), dec!(2.15), dec!(1.17))),
        ("MSFT", (dec!(378.85), dec!(-1.25), dec!(-0.33))),
        ("GOOGL", (dec!(142.56), dec!(0.85), dec!(0.60))),
        ("AMZN", (dec!(153.45), dec!(3.22), dec!(2.14))),
        ("TSLA", (dec!(248.50), dec!(5.20), dec!(2.13))),
        ("NVDA", (dec!(195.40), dec!(8.75), dec!(4.69))),
        ("META", (dec!(325.60), dec!(-2.40), dec!(-0.73))),
        ("NFLX", (dec!(485.75), dec!(12.30), dec!(2.60))),
        ("AMD", (dec!(115.80), dec!(4.55), dec!(4.09))),
        ("INTC", (dec!(35.20), dec!(-0.85), dec!(-2.36))),
        ("SPY", (dec!(445.20), dec!(1.80), dec!(0.41))),
        ("QQQ", (dec!(378.90), dec!(2.15), dec!(0.57))),
        ("VTI", (dec!(240.85), dec!(1.25), dec!(0.52))),
        ("BTC-USD", (dec!(67500.00), dec!(1250.00), dec!(1.89))),
        ("ETH-USD", (dec!(3850.00), dec!(125.50), dec!(3.37))),
    ]);

    static ref MOCK_ASSETS: Vec<QuoteSummary> = vec![
        summary("AAPL", "Apple Inc.", "equity", "NASDAQ"),
        summary("MSFT", "Microsoft Corporation", "equity", "NASDAQ"),
        summary("GOOGL", "Alphabet Inc.", "equity", "NASDAQ"),
        summary("AMZN", "Amazon.com Inc.", "equity", "NASDAQ"),
        summary("TSLA", "Tesla Inc.", "equity", "NASDAQ"),
        summary("NVDA", "NVIDIA Corporation", "equity", "NASDAQ"),
        summary("META", "Meta Platforms Inc.", "equity", "NASDAQ"),
        summary("NFLX", "Netflix Inc.", "equity", "NASDAQ"),
        summary("AMD", "Advanced Micro Devices", "equity", "NASDAQ"),
        summary("INTC", "Intel Corporation", "equity", "NASDAQ"),
        summary("SPY", "SPDR S&P 500 ETF Trust", "etf", "NYSE"),
        summary("QQQ", "Invesco QQQ Trust", "etf", "NASDAQ"),
        summary("VTI", "Vanguard Total Stock Market ETF", "etf", "NYSE"),
        summary("BTC-USD", "Bitcoin USD", "cryptocurrency", "CCC"),
        summary("ETH-USD", "Ethereum USD", "cryptocurrency", "CCC"),
    ];
}

fn summary(ticker: &str, name: &str, quote_type: &str, exchange: &str) -> QuoteSummary {
    QuoteSummary {
        ticker: ticker.to_string(),
        name: name.to_string(),
        quote_type: quote_type.to_string(),
        exchange: exchange.to_string(),
    }
}

/// Static snapshot served when no live index feed is wired.
pub(crate) fn market_snapshot_now() -> MarketSnapshot {
    MarketSnapshot {
        as_of: Utc::now(),
        status: MarketStatus::Open,
        indices: MarketIndices {
            sp500: MarketIndex {
                value: dec!(4567.89),
                change: dec!(23.45),
                change_percent: dec!(0.52),
            },
            nasdaq: MarketIndex {
                value: dec!(14234.56),
                change: dec!(67.89),
                change_percent: dec!(0.48),
            },
            dow: MarketIndex {
                value: dec!(34567.12),
                change: dec!(123.45),
                change_percent: dec!(0.36),
            },
        },
    }
}

/// Offline provider backed by a static quote table. Symbols outside the table
/// are reported as not found, which callers treat as "keep the existing
/// price".
pub struct MockProvider;

impl MockProvider {
    pub fn new() -> Self {
        MockProvider
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataProvider for MockProvider {
    async fn search_ticker(&self, query: &str) -> Result<Vec<QuoteSummary>, MarketDataError> {
        let needle = query.to_lowercase();
        let hits = MOCK_ASSETS
            .iter()
            .filter(|asset| {
                asset.ticker.to_lowercase().contains(&needle)
                    || asset.name.to_lowercase().contains(&needle)
            })
            .take(SEARCH_RESULT_LIMIT)
            .cloned()
            .collect();
        Ok(hits)
    }

    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        let key = symbol.to_uppercase();
        let (price, change, change_percent) = MOCK_PRICES
            .get(key.as_str())
            .copied()
            .ok_or_else(|| MarketDataError::NotFound(format!("No mock quote for {}", symbol)))?;

        Ok(Quote {
            symbol: key.clone(),
            price,
            change,
            change_percent,
            currency: "USD".to_string(),
            name: key,
            timestamp: Utc::now(),
        })
    }

    async fn get_market_snapshot(&self) -> Result<MarketSnapshot, MarketDataError> {
        Ok(market_snapshot_now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_search_matches_ticker_and_name() {
        let provider = MockProvider::new();

        let by_ticker = provider.search_ticker("msf").await.unwrap();
        assert_eq!(by_ticker[0].ticker, "MSFT");

        let by_name = provider.search_ticker("vanguard").await.unwrap();
        assert_eq!(by_name[0].ticker, "VTI");
    }

    #[tokio::test]
    async fn test_search_caps_results() {
        let provider = MockProvider::new();
        // Broad match across many names.
        let hits = provider.search_ticker("a").await.unwrap();
        assert!(hits.len() <= SEARCH_RESULT_LIMIT);
    }

    #[tokio::test]
    async fn test_quote_lookup() {
        let provider = MockProvider::new();
        let quote = provider.get_latest_quote("btc-usd").await.unwrap();
        assert_eq!(quote.price, dec!(67500.00));
        assert_eq!(quote.currency, "USD");

        assert!(matches!(
            provider.get_latest_quote("ZZZZ").await,
            Err(MarketDataError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_snapshot_reports_open_market() {
        let provider = MockProvider::new();
        let snapshot = provider.get_market_snapshot().await.unwrap();
        assert_eq!(snapshot.status, MarketStatus::Open);
        assert_eq!(snapshot.indices.sp500.value, dec!(4567.89));
    }
}
