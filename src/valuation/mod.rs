pub mod liquidity_service;
pub mod valuation_model;
pub mod valuation_service;

pub use liquidity_service::{LiquidityCalculator, LiquiditySnapshot};
pub use valuation_model::{AllocationEntry, PortfolioMetrics};
pub use valuation_service::ValuationEngine;
