use std::time::Duration;

/// Ticker of the US dollar cash position debited by buys and credited by sells
pub const USD_CASH_TICKER: &str = "USD-CASH";

/// Suffix of cash position tickers ("USD-CASH", "EUR-CASH", ...)
pub const CASH_TICKER_SUFFIX: &str = "-CASH";

/// Decimal precision for valuation calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Minimum query length before a symbol search is issued
pub const SEARCH_MIN_QUERY_LEN: usize = 2;

/// Debounce window between a keystroke and the symbol search it triggers
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(350);

/// Maximum number of symbol search results returned to the caller
pub const SEARCH_RESULT_LIMIT: usize = 5;

/// Cadence at which the surrounding shell polls the market snapshot
pub const MARKET_SYNC_INTERVAL: Duration = Duration::from_secs(35);
