pub mod trade_validator;
pub mod trading_errors;
pub mod trading_model;

pub use trade_validator::TradeValidator;
pub use trading_errors::TradeError;
pub use trading_model::{
    AssetMetadata, DepositRequest, NewAssetEntry, PositionEdit, TradeOrder, TradeSide,
};
