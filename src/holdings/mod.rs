pub mod holdings_model;

pub use holdings_model::{AssetClass, Position};
