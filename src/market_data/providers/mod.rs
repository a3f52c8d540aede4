pub mod mock_provider;
pub mod yahoo_provider;

pub use mock_provider::MockProvider;
pub use yahoo_provider::YahooProvider;
