use rust_decimal::Decimal;
use thiserror::Error;

/// Custom error type for trade-related operations. Every variant is
/// recoverable: the requested mutation is rejected, state stays untouched and
/// the message is suitable for direct display.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TradeError {
    #[error("{0}")]
    Validation(String),

    #[error("Insufficient funds. Available: ${available}, Required: ${required}")]
    InsufficientFunds {
        available: Decimal,
        required: Decimal,
    },

    #[error("You do not own this asset")]
    NotOwned,

    #[error("You only own {held} shares")]
    InsufficientHoldings { held: Decimal },
}

impl From<TradeError> for String {
    fn from(error: TradeError) -> Self {
        error.to_string()
    }
}
