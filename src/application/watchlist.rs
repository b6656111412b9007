use crate::domain::entities::quote::InstrumentQuote;
use crate::domain::entities::watchlist::WatchlistEntry;
use crate::domain::error::DomainError;
use crate::domain::ports::market_data::MarketData;
use crate::domain::ports::watchlist_store::WatchlistStore;
use std::sync::Arc;

/// Tracks a user-curated list of tickers and scans it for live quotes.
pub struct WatchlistUseCase {
    store: Arc<dyn WatchlistStore>,
    market: Arc<dyn MarketData>,
    summary_max: usize,
}

impl WatchlistUseCase {
    pub fn new(
        store: Arc<dyn WatchlistStore>,
        market: Arc<dyn MarketData>,
        summary_max: usize,
    ) -> Self {
        Self {
            store,
            market,
            summary_max,
        }
    }

    pub fn list(&self) -> Result<Vec<WatchlistEntry>, DomainError> {
        self.store.load()
    }

    pub fn add(&self, ticker: &str) -> Result<WatchlistEntry, DomainError> {
        let entry = WatchlistEntry::new(ticker.to_string()).map_err(DomainError::InvalidInput)?;
        let mut entries = self.store.load()?;
        if entries.iter().any(|e| e.ticker == entry.ticker) {
            return Err(DomainError::InvalidInput(format!(
                "{} is already on the watchlist",
                entry.ticker
            )));
        }
        entries.push(entry.clone());
        self.store.save(&entries)?;
        Ok(entry)
    }

    pub fn remove(&self, ticker: &str) -> Result<(), DomainError> {
        let ticker = ticker.trim().to_uppercase();
        let entries = self.store.load()?;
        let remaining: Vec<WatchlistEntry> = entries
            .iter()
            .filter(|e| e.ticker != ticker)
            .cloned()
            .collect();
        if remaining.len() == entries.len() {
            return Err(DomainError::NotFound(format!(
                "{ticker} is not on the watchlist"
            )));
        }
        self.store.save(&remaining)
    }

    /// Fetch a quote for every watched ticker, one at a time, in list
    /// order. A failing ticker is skipped with a warning; the remaining
    /// sequence continues.
    pub async fn scan(&self) -> Result<Vec<InstrumentQuote>, DomainError> {
        let entries = self.store.load()?;
        let mut rows = Vec::with_capacity(entries.len());
        for entry in &entries {
            match self.market.quote(&entry.ticker).await {
                Ok(raw) => rows.push(InstrumentQuote::from_raw(
                    &entry.ticker,
                    &raw,
                    self.summary_max,
                )),
                Err(e) => {
                    eprintln!("Warning: Failed to fetch {}: {e}", entry.ticker);
                }
            }
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::market_data::{
        HistoryRange, MarketDataError, NewsItem, OhlcBar, RawQuote,
    };
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MemoryStore {
        entries: Mutex<Vec<WatchlistEntry>>,
    }

    impl WatchlistStore for MemoryStore {
        fn load(&self) -> Result<Vec<WatchlistEntry>, DomainError> {
            Ok(self.entries.lock().unwrap().clone())
        }

        fn save(&self, entries: &[WatchlistEntry]) -> Result<(), DomainError> {
            *self.entries.lock().unwrap() = entries.to_vec();
            Ok(())
        }
    }

    struct FakeMarket {
        quotes: HashMap<String, RawQuote>,
    }

    #[async_trait]
    impl MarketData for FakeMarket {
        fn name(&self) -> &str {
            "fake"
        }

        async fn quote(&self, ticker: &str) -> Result<RawQuote, MarketDataError> {
            self.quotes
                .get(ticker)
                .cloned()
                .ok_or_else(|| MarketDataError::NotFound(ticker.to_string()))
        }

        async fn history(
            &self,
            _ticker: &str,
            _range: HistoryRange,
        ) -> Result<Vec<OhlcBar>, MarketDataError> {
            Ok(vec![])
        }

        async fn news(&self, _ticker: &str) -> Result<Vec<NewsItem>, MarketDataError> {
            Ok(vec![])
        }
    }

    fn use_case(tickers: &[&str], known: &[&str]) -> WatchlistUseCase {
        let entries = tickers
            .iter()
            .map(|t| WatchlistEntry::new(t.to_string()).unwrap())
            .collect();
        let quotes = known
            .iter()
            .map(|t| {
                (
                    t.to_string(),
                    RawQuote {
                        price: Some(100.0),
                        ..Default::default()
                    },
                )
            })
            .collect();
        WatchlistUseCase::new(
            Arc::new(MemoryStore {
                entries: Mutex::new(entries),
            }),
            Arc::new(FakeMarket { quotes }),
            400,
        )
    }

    #[test]
    fn test_add_deduplicates() {
        let uc = use_case(&["AAA"], &[]);
        assert!(uc.add("aaa").is_err());
        let added = uc.add("bbb").unwrap();
        assert_eq!(added.ticker, "BBB");
        assert_eq!(uc.list().unwrap().len(), 2);
    }

    #[test]
    fn test_remove_missing_is_not_found() {
        let uc = use_case(&["AAA"], &[]);
        assert!(matches!(
            uc.remove("BBB").unwrap_err(),
            DomainError::NotFound(_)
        ));
        uc.remove("AAA").unwrap();
        assert!(uc.list().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_scan_skips_failures_and_keeps_order() {
        let uc = use_case(&["A", "B", "C"], &["A", "C"]);
        let rows = uc.scan().await.unwrap();
        let tickers: Vec<&str> = rows.iter().map(|q| q.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["A", "C"]);
    }
}
