use crate::domain::entities::quote::InstrumentQuote;
use crate::domain::ports::market_data::MarketData;
use crate::domain::values::valuation::round2;
use serde::Serialize;
use std::sync::Arc;

/// Day-change card for one passive asset (index or commodity ETF).
#[derive(Debug, Clone, Serialize)]
pub struct TrackerCard {
    pub asset: String,
    pub ticker: String,
    pub price: f64,
    pub change: f64,
    pub change_pct: f64,
}

/// Tracks a configured set of passive assets by their day change.
pub struct TrackerUseCase {
    market: Arc<dyn MarketData>,
    trackers: Vec<(String, String)>,
    summary_max: usize,
}

impl TrackerUseCase {
    pub fn new(
        market: Arc<dyn MarketData>,
        trackers: Vec<(String, String)>,
        summary_max: usize,
    ) -> Self {
        Self {
            market,
            trackers,
            summary_max,
        }
    }

    /// One card per configured asset, in configuration order; assets
    /// whose fetch fails are skipped.
    pub async fn run(&self) -> Vec<TrackerCard> {
        let mut cards = Vec::with_capacity(self.trackers.len());
        for (asset, ticker) in &self.trackers {
            match self.market.quote(ticker).await {
                Ok(raw) => {
                    let quote = InstrumentQuote::from_raw(ticker, &raw, self.summary_max);
                    cards.push(TrackerCard {
                        asset: asset.clone(),
                        ticker: ticker.clone(),
                        price: quote.price,
                        change: round2(quote.price - quote.previous_close),
                        change_pct: quote.day_change_pct(),
                    });
                }
                Err(e) => {
                    eprintln!("Warning: Failed to fetch {ticker}: {e}");
                }
            }
        }
        cards
    }
}
