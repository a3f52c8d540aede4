use thiserror::Error;

use crate::market_data::MarketDataError;
use crate::trading::TradeError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio application
#[derive(Error, Debug)]
pub enum Error {
    #[error("Trade error: {0}")]
    Trade(#[from] TradeError),

    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}
