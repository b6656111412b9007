use crate::domain::entities::position::PortfolioPosition;
use crate::domain::entities::quote::InstrumentQuote;
use crate::domain::error::DomainError;
use crate::domain::ports::market_data::MarketData;
use crate::domain::ports::portfolio_store::PortfolioStore;
use crate::domain::values::valuation::round2;
use serde::Serialize;
use std::sync::Arc;

/// One held lot valued at the current market price.
#[derive(Debug, Clone, Serialize)]
pub struct PositionRow {
    pub ticker: String,
    pub quantity: u32,
    pub avg_price: f64,
    pub current_price: f64,
    pub invested: f64,
    pub current_value: f64,
    pub pnl: f64,
    pub return_pct: f64,
}

/// Live valuation of all holdings. Positions whose quote could not be
/// fetched appear nowhere: not as rows and not in the totals.
#[derive(Debug, Serialize)]
pub struct PortfolioReport {
    pub rows: Vec<PositionRow>,
    pub total_invested: f64,
    pub current_value: f64,
    pub total_pnl: f64,
    pub return_pct: f64,
}

/// Manages held positions and values them against live quotes.
pub struct PortfolioUseCase {
    store: Arc<dyn PortfolioStore>,
    market: Arc<dyn MarketData>,
    summary_max: usize,
}

impl PortfolioUseCase {
    pub fn new(
        store: Arc<dyn PortfolioStore>,
        market: Arc<dyn MarketData>,
        summary_max: usize,
    ) -> Self {
        Self {
            store,
            market,
            summary_max,
        }
    }

    pub fn list(&self) -> Result<Vec<PortfolioPosition>, DomainError> {
        self.store.load()
    }

    /// Record a new lot. Repeat tickers are separate lots, as traded.
    pub fn add_position(
        &self,
        ticker: &str,
        quantity: u32,
        avg_price: f64,
    ) -> Result<PortfolioPosition, DomainError> {
        let position = PortfolioPosition::new(ticker.to_string(), quantity, avg_price)
            .map_err(DomainError::InvalidInput)?;
        let mut positions = self.store.load()?;
        positions.push(position.clone());
        self.store.save(&positions)?;
        Ok(position)
    }

    pub fn clear(&self) -> Result<(), DomainError> {
        self.store.save(&[])
    }

    /// Value every position at its live price, sequentially and in
    /// position order. A position whose fetch fails is dropped from the
    /// report entirely rather than valued at zero.
    pub async fn report(&self) -> Result<PortfolioReport, DomainError> {
        let positions = self.store.load()?;

        let mut rows = Vec::with_capacity(positions.len());
        let mut total_invested = 0.0;
        let mut current_value = 0.0;

        for position in &positions {
            let raw = match self.market.quote(&position.ticker).await {
                Ok(raw) => raw,
                Err(e) => {
                    eprintln!("Warning: Failed to fetch {}: {e}", position.ticker);
                    continue;
                }
            };
            let quote = InstrumentQuote::from_raw(&position.ticker, &raw, self.summary_max);

            let invested = position.invested();
            let value = position.quantity as f64 * quote.price;
            let pnl = value - invested;
            let return_pct = if invested > 0.0 {
                pnl / invested * 100.0
            } else {
                0.0
            };

            total_invested += invested;
            current_value += value;

            rows.push(PositionRow {
                ticker: position.ticker.clone(),
                quantity: position.quantity,
                avg_price: position.avg_price,
                current_price: quote.price,
                invested: round2(invested),
                current_value: round2(value),
                pnl: round2(pnl),
                return_pct: round2(return_pct),
            });
        }

        let total_pnl = current_value - total_invested;
        let return_pct = if total_invested > 0.0 {
            total_pnl / total_invested * 100.0
        } else {
            0.0
        };

        Ok(PortfolioReport {
            rows,
            total_invested: round2(total_invested),
            current_value: round2(current_value),
            total_pnl: round2(total_pnl),
            return_pct: round2(return_pct),
        })
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
        positions: Mutex<Vec<PortfolioPosition>>,
    }

    impl PortfolioStore for MemoryStore {
        fn load(&self) -> Result<Vec<PortfolioPosition>, DomainError> {
            Ok(self.positions.lock().unwrap().clone())
        }

        fn save(&self, positions: &[PortfolioPosition]) -> Result<(), DomainError> {
            *self.positions.lock().unwrap() = positions.to_vec();
            Ok(())
        }
    }

    struct FakeMarket {
        prices: HashMap<String, f64>,
    }

    #[async_trait]
    impl MarketData for FakeMarket {
        fn name(&self) -> &str {
            "fake"
        }

        async fn quote(&self, ticker: &str) -> Result<RawQuote, MarketDataError> {
            self.prices
                .get(ticker)
                .map(|p| RawQuote {
                    price: Some(*p),
                    ..Default::default()
                })
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

    fn use_case(
        positions: Vec<(&str, u32, f64)>,
        prices: Vec<(&str, f64)>,
    ) -> PortfolioUseCase {
        let positions = positions
            .into_iter()
            .map(|(t, q, p)| PortfolioPosition::new(t.to_string(), q, p).unwrap())
            .collect();
        let prices = prices.into_iter().map(|(t, p)| (t.to_string(), p)).collect();
        PortfolioUseCase::new(
            Arc::new(MemoryStore {
                positions: Mutex::new(positions),
            }),
            Arc::new(FakeMarket { prices }),
            400,
        )
    }

    #[tokio::test]
    async fn test_report_values_positions() {
        let uc = use_case(
            vec![("AAA", 10, 100.0), ("BBB", 5, 200.0)],
            vec![("AAA", 110.0), ("BBB", 180.0)],
        );
        let report = uc.report().await.unwrap();

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].pnl, 100.0);
        assert_eq!(report.rows[1].pnl, -100.0);
        assert_eq!(report.total_invested, 2000.0);
        assert_eq!(report.current_value, 2000.0);
        assert_eq!(report.total_pnl, 0.0);
        assert_eq!(report.return_pct, 0.0);
    }

    #[tokio::test]
    async fn test_failed_fetch_excluded_from_totals() {
        let uc = use_case(
            vec![("AAA", 10, 100.0), ("GONE", 5, 200.0)],
            vec![("AAA", 110.0)],
        );
        let report = uc.report().await.unwrap();

        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].ticker, "AAA");
        // GONE's invested 1000 must not appear anywhere.
        assert_eq!(report.total_invested, 1000.0);
        assert_eq!(report.current_value, 1100.0);
        assert_eq!(report.total_pnl, 100.0);
        assert_eq!(report.return_pct, 10.0);
    }

    #[tokio::test]
    async fn test_empty_portfolio_reports_zeroes() {
        let uc = use_case(vec![], vec![]);
        let report = uc.report().await.unwrap();
        assert!(report.rows.is_empty());
        assert_eq!(report.total_invested, 0.0);
        assert_eq!(report.return_pct, 0.0);
    }

    #[test]
    fn test_add_and_clear() {
        let uc = use_case(vec![], vec![]);
        uc.add_position("aaa", 10, 100.0).unwrap();
        assert!(uc.add_position("bbb", 0, 100.0).is_err());
        assert_eq!(uc.list().unwrap().len(), 1);
        uc.clear().unwrap();
        assert!(uc.list().unwrap().is_empty());
    }
}
