pub mod market_data_errors;
pub mod market_data_model;
pub mod market_data_provider;
pub mod market_data_service;
pub mod providers;

pub use market_data_errors::MarketDataError;
pub use market_data_model::{
    MarketIndex, MarketIndices, MarketSnapshot, MarketStatus, PriceUpdate, Quote, QuoteSummary,
};
pub use market_data_provider::MarketDataProvider;
pub use market_data_service::MarketDataService;
