pub mod constants;
pub mod errors;

pub mod fx;
pub mod holdings;
pub mod ledger;
pub mod market_data;
pub mod session;
pub mod trading;
pub mod utils;
pub mod valuation;

pub use errors::{Error, Result};
pub use session::PortfolioSession;
