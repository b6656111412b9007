use crate::domain::entities::quote::InstrumentQuote;
use crate::domain::ports::market_data::MarketData;
use crate::domain::values::signal::Signal;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Outcome of scanning the configured universe for undervalued instruments.
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub scanned_at: DateTime<Utc>,
    pub universe_size: usize,
    /// All fetched rows, in universe order. Failing tickers are absent.
    pub rows: Vec<InstrumentQuote>,
    /// The rows trading below their intrinsic value.
    pub buys: Vec<InstrumentQuote>,
}

/// Scans a fixed universe of tickers and partitions out the buy signals.
pub struct ScanUseCase {
    market: Arc<dyn MarketData>,
    universe: Vec<String>,
    summary_max: usize,
}

impl ScanUseCase {
    pub fn new(market: Arc<dyn MarketData>, universe: Vec<String>, summary_max: usize) -> Self {
        Self {
            market,
            universe,
            summary_max,
        }
    }

    /// Fetch every universe ticker sequentially, in order. A failing
    /// ticker is skipped with a warning and never placeholder-filled.
    pub async fn run(&self) -> ScanReport {
        let mut rows = Vec::with_capacity(self.universe.len());
        for ticker in &self.universe {
            match self.market.quote(ticker).await {
                Ok(raw) => rows.push(InstrumentQuote::from_raw(ticker, &raw, self.summary_max)),
                Err(e) => {
                    eprintln!("Warning: Failed to fetch {ticker}: {e}");
                }
            }
        }

        let buys: Vec<InstrumentQuote> = rows
            .iter()
            .filter(|q| q.signal == Signal::Buy)
            .cloned()
            .collect();

        ScanReport {
            scanned_at: Utc::now(),
            universe_size: self.universe.len(),
            rows,
            buys,
        }
    }
}
