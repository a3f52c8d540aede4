use futures::future::join_all;
use log::{debug, warn};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::constants::{SEARCH_DEBOUNCE, SEARCH_MIN_QUERY_LEN};
use crate::holdings::Position;

use super::market_data_errors::MarketDataError;
use super::market_data_model::{MarketSnapshot, PriceUpdate, Quote, QuoteSummary};
use super::market_data_provider::MarketDataProvider;

/// Front door to the quote/search collaborator: debounced search-as-you-type
/// and batched price refreshes over the position set.
pub struct MarketDataService {
    provider: Arc<dyn MarketDataProvider>,
    search_generation: AtomicU64,
}

impl MarketDataService {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self {
            provider,
            search_generation: AtomicU64::new(0),
        }
    }

    /// Debounced symbol search. Queries below the minimum length resolve to
    /// an empty result set without touching the provider. Returns `None` when
    /// a newer search was issued while this one was waiting or in flight; the
    /// stale result must be discarded, not applied.
    pub async fn search_debounced(&self, query: &str) -> Option<Vec<QuoteSummary>> {
        if query.trim().len() < SEARCH_MIN_QUERY_LEN {
            // Short queries still supersede any pending search.
            self.search_generation.fetch_add(1, Ordering::SeqCst);
            return Some(Vec::new());
        }

        let token = self.search_generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(SEARCH_DEBOUNCE).await;
        if self.search_generation.load(Ordering::SeqCst) != token {
            debug!("search for '{}' superseded during debounce", query);
            return None;
        }

        let results = match self.provider.search_ticker(query).await {
            Ok(results) => results,
            Err(err) => {
                // Collaborator failures are never surfaced as errors.
                warn!("symbol search for '{}' failed: {}", query, err);
                Vec::new()
            }
        };

        if self.search_generation.load(Ordering::SeqCst) != token {
            debug!("search for '{}' superseded while in flight", query);
            return None;
        }
        Some(results)
    }

    pub async fn get_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        self.provider.get_latest_quote(symbol).await
    }

    pub async fn market_snapshot(&self) -> Result<MarketSnapshot, MarketDataError> {
        self.provider.get_market_snapshot().await
    }

    /// Requotes all non-cash positions as one concurrent batch. A failed
    /// fetch falls back to the position's existing price and never blocks the
    /// updates from the others.
    pub async fn refresh_prices(&self, positions: &[Position]) -> Vec<PriceUpdate> {
        let fetches = positions.iter().filter(|p| !p.is_cash()).map(|position| {
            let provider = Arc::clone(&self.provider);
            async move {
                match provider.get_latest_quote(&position.ticker).await {
                    Ok(quote) => PriceUpdate {
                        position_id: position.id.clone(),
                        price: quote.price,
                    },
                    Err(err) => {
                        warn!(
                            "price refresh for {} failed: {}, keeping {}",
                            position.ticker, err, position.current_price
                        );
                        PriceUpdate {
                            position_id: position.id.clone(),
                            price: position.current_price,
                        }
                    }
                }
            }
        });

        join_all(fetches).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holdings::AssetClass;
    use crate::market_data::providers::MockProvider;
    use rust_decimal_macros::dec;

    fn service() -> MarketDataService {
        MarketDataService::new(Arc::new(MockProvider::new()))
    }

    fn position(ticker: &str, class: AssetClass, price: rust_decimal::Decimal) -> Position {
        Position {
            id: format!("POS-{}", ticker),
            ticker: ticker.to_string(),
            name: ticker.to_string(),
            asset_class: class,
            quantity: dec!(1),
            current_price: price,
            average_cost: price,
            base_currency: "USD".to_string(),
        }
    }

    #[tokio::test]
    async fn test_short_query_returns_empty_without_provider_call() {
        let service = service();
        let results = service.search_debounced("a").await;
        assert_eq!(results, Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_superseded_search_is_discarded() {
        let service = service();
        let (first, second) = tokio::join!(
            service.search_debounced("apple"),
            async {
                // Issued just after the first; its token wins.
                tokio::time::sleep(std::time::Duration::from_millis(50)).await;
                service.search_debounced("micro").await
            }
        );

        assert_eq!(first, None);
        let hits = second.expect("latest search must resolve");
        assert!(hits.iter().any(|s| s.ticker == "MSFT"));
    }

    #[tokio::test]
    async fn test_refresh_updates_known_and_keeps_unknown_prices() {
        let service = service();
        let positions = vec![
            position("AAPL", AssetClass::Equity, dec!(1.00)),
            position("ZZZZ", AssetClass::Equity, dec!(77.77)),
            position("USD-CASH", AssetClass::Cash, dec!(1.00)),
        ];

        let updates = service.refresh_prices(&positions).await;
        // Cash positions are never requoted.
        assert_eq!(updates.len(), 2);

        let aapl = updates.iter().find(|u| u.position_id == "POS-AAPL").unwrap();
        assert_eq!(aapl.price, dec!(185.20));

        // Unknown ticker fails at the provider; the existing price survives.
        let zzzz = updates.iter().find(|u| u.position_id == "POS-ZZZZ").unwrap();
        assert_eq!(zzzz.price, dec!(77.77));
    }
}
