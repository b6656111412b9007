use crate::domain::entities::quote::InstrumentQuote;
use crate::domain::error::DomainError;
use crate::domain::ports::market_data::{HistoryRange, MarketData, NewsItem, OhlcBar};
use std::sync::Arc;

/// Fetches one ticker's raw fields and shapes them into a complete record.
pub struct QuoteUseCase {
    market: Arc<dyn MarketData>,
    summary_max: usize,
}

impl QuoteUseCase {
    pub fn new(market: Arc<dyn MarketData>, summary_max: usize) -> Self {
        Self {
            market,
            summary_max,
        }
    }

    /// Fetch, normalize and evaluate one ticker. A failed fetch is an
    /// explicit no-data outcome, never a zero-filled record.
    pub async fn snapshot(&self, ticker: &str) -> Result<InstrumentQuote, DomainError> {
        let ticker = ticker.trim().to_uppercase();
        if ticker.is_empty() {
            return Err(DomainError::InvalidInput("Ticker must not be empty".into()));
        }
        let raw = self
            .market
            .quote(&ticker)
            .await
            .map_err(|e| DomainError::DataUnavailable(format!("{ticker}: {e}")))?;
        Ok(InstrumentQuote::from_raw(&ticker, &raw, self.summary_max))
    }

    pub async fn history(
        &self,
        ticker: &str,
        range: HistoryRange,
    ) -> Result<Vec<OhlcBar>, DomainError> {
        let ticker = ticker.trim().to_uppercase();
        self.market
            .history(&ticker, range)
            .await
            .map_err(|e| DomainError::DataUnavailable(format!("{ticker}: {e}")))
    }

    pub async fn news(&self, ticker: &str) -> Result<Vec<NewsItem>, DomainError> {
        let ticker = ticker.trim().to_uppercase();
        self.market
            .news(&ticker)
            .await
            .map_err(|e| DomainError::DataUnavailable(format!("{ticker}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::market_data::{MarketDataError, RawQuote};
    use crate::domain::values::signal::Signal;
    use async_trait::async_trait;
    use std::collections::HashMap;

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

    fn use_case(quotes: HashMap<String, RawQuote>) -> QuoteUseCase {
        QuoteUseCase::new(Arc::new(FakeMarket { quotes }), 400)
    }

    #[tokio::test]
    async fn test_snapshot_normalizes_and_evaluates() {
        let mut quotes = HashMap::new();
        quotes.insert(
            "ACME".to_string(),
            RawQuote {
                price: Some(50.0),
                eps: Some(10.0),
                book_value: Some(20.0),
                ..Default::default()
            },
        );
        let q = use_case(quotes).snapshot("acme").await.unwrap();
        assert_eq!(q.ticker, "ACME");
        assert_eq!(q.intrinsic_value, 67.08);
        assert_eq!(q.signal, Signal::Buy);
    }

    #[tokio::test]
    async fn test_unknown_ticker_is_data_unavailable() {
        let err = use_case(HashMap::new()).snapshot("NOPE").await.unwrap_err();
        assert!(matches!(err, DomainError::DataUnavailable(_)));
    }

    #[tokio::test]
    async fn test_empty_ticker_rejected() {
        let err = use_case(HashMap::new()).snapshot("  ").await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }
}
