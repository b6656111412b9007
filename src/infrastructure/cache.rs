use crate::domain::ports::market_data::{
    HistoryRange, MarketData, MarketDataError, NewsItem, OhlcBar, RawQuote,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Time-boxed memoization: at most one entry per key, valid for a fixed
/// TTL. A zero TTL disables the cache entirely.
pub struct TtlCache<V> {
    ttl: Duration,
    entries: Mutex<HashMap<String, (Instant, V)>>,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn get(&self, key: &str) -> Option<V> {
        let mut entries = self.entries.lock().ok()?;
        match entries.get(key) {
            Some((stored_at, value)) if stored_at.elapsed() < self.ttl => Some(value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    pub fn put(&self, key: &str, value: V) {
        if self.ttl.is_zero() {
            return;
        }
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), (Instant::now(), value));
        }
    }
}

/// Decorator that memoizes quote and history lookups for the TTL window,
/// so one user interaction does not refetch the same ticker. News is
/// passed through uncached.
pub struct CachedMarketData {
    inner: Arc<dyn MarketData>,
    quotes: TtlCache<RawQuote>,
    history: TtlCache<Vec<OhlcBar>>,
}

impl CachedMarketData {
    pub fn new(inner: Arc<dyn MarketData>, ttl: Duration) -> Self {
        Self {
            inner,
            quotes: TtlCache::new(ttl),
            history: TtlCache::new(ttl),
        }
    }
}

#[async_trait]
impl MarketData for CachedMarketData {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn quote(&self, ticker: &str) -> Result<RawQuote, MarketDataError> {
        if let Some(raw) = self.quotes.get(ticker) {
            return Ok(raw);
        }
        let raw = self.inner.quote(ticker).await?;
        self.quotes.put(ticker, raw.clone());
        Ok(raw)
    }

    async fn history(
        &self,
        ticker: &str,
        range: HistoryRange,
    ) -> Result<Vec<OhlcBar>, MarketDataError> {
        let key = format!("{ticker}:{range}");
        if let Some(bars) = self.history.get(&key) {
            return Ok(bars);
        }
        let bars = self.inner.history(ticker, range).await?;
        self.history.put(&key, bars.clone());
        Ok(bars)
    }

    async fn news(&self, ticker: &str) -> Result<Vec<NewsItem>, MarketDataError> {
        self.inner.news(ticker).await
    }
}
