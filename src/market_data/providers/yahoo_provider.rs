use async_trait::async_trait;
use chrono::Utc;
use num_traits::FromPrimitive;
use reqwest::Client;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::constants::SEARCH_RESULT_LIMIT;
use crate::market_data::market_data_errors::MarketDataError;
use crate::market_data::market_data_model::{MarketSnapshot, Quote, QuoteSummary};
use crate::market_data::market_data_provider::MarketDataProvider;

use super::mock_provider::market_snapshot_now;

const CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
const SEARCH_URL: &str = "https://query1.finance.yahoo.com/v1/finance/search";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Live provider against the public Yahoo chart/search endpoints.
pub struct YahooProvider {
    client: Client,
}

impl YahooProvider {
    pub fn new() -> Result<Self, MarketDataError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    fn decimal_field(meta: &Value, key: &str) -> Option<Decimal> {
        meta.get(key).and_then(Value::as_f64).and_then(Decimal::from_f64)
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    async fn search_ticker(&self, query: &str) -> Result<Vec<QuoteSummary>, MarketDataError> {
        let url = format!(
            "{}?q={}&quotesCount=10&newsCount=0",
            SEARCH_URL,
            urlencoding::encode(query)
        );
        let body: Value = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let quotes = body
            .get("quotes")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        let results = quotes
            .iter()
            .take(SEARCH_RESULT_LIMIT)
            .filter_map(|quote| {
                let ticker = quote.get("symbol")?.as_str()?.to_string();
                let name = quote
                    .get("shortname")
                    .and_then(Value::as_str)
                    .or_else(|| quote.get("longname").and_then(Value::as_str))
                    .unwrap_or(ticker.as_str())
                    .to_string();
                let quote_type = quote
                    .get("typeDisp")
                    .and_then(Value::as_str)
                    .map(|t| t.to_lowercase())
                    .unwrap_or_else(|| "equity".to_string());
                let exchange = quote
                    .get("exchange")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                Some(QuoteSummary {
                    ticker,
                    name,
                    quote_type,
                    exchange,
                })
            })
            .collect();

        Ok(results)
    }

    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        let url = format!(
            "{}/{}?interval=1m&range=1d",
            CHART_URL,
            urlencoding::encode(symbol)
        );
        let body: Value = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let meta = body
            .pointer("/chart/result/0/meta")
            .ok_or_else(|| MarketDataError::NotFound(format!("No chart data for {}", symbol)))?;

        let previous_close = Self::decimal_field(meta, "previousClose").ok_or_else(|| {
            MarketDataError::ParsingError(format!("Missing previousClose for {}", symbol))
        })?;
        let price = Self::decimal_field(meta, "regularMarketPrice").unwrap_or(previous_close);

        let change = price - previous_close;
        let change_percent = if previous_close.is_zero() {
            Decimal::ZERO
        } else {
            change / previous_close * Decimal::ONE_HUNDRED
        };

        Ok(Quote {
            symbol: symbol.to_uppercase(),
            price,
            change,
            change_percent,
            currency: meta
                .get("currency")
                .and_then(Value::as_str)
                .unwrap_or("USD")
                .to_string(),
            name: meta
                .get("longName")
                .and_then(Value::as_str)
                .unwrap_or(symbol)
                .to_string(),
            timestamp: Utc::now(),
        })
    }

    async fn get_market_snapshot(&self) -> Result<MarketSnapshot, MarketDataError> {
        // No live index feed is wired; serve the static snapshot.
        Ok(market_snapshot_now())
    }
}
