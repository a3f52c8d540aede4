use async_trait::async_trait;

use super::market_data_errors::MarketDataError;
use super::market_data_model::{MarketSnapshot, Quote, QuoteSummary};

/// Quote/search collaborator consumed by the core. Implementations are
/// interchangeable; the caller decides whether live or mock data backs the
/// session.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn search_ticker(&self, query: &str) -> Result<Vec<QuoteSummary>, MarketDataError>;
    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError>;
    async fn get_market_snapshot(&self) -> Result<MarketSnapshot, MarketDataError>;
}
