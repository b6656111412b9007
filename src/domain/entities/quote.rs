use crate::domain::ports::market_data::RawQuote;
use crate::domain::values::signal::Signal;
use crate::domain::values::valuation::{evaluate, round2};
use serde::{Deserialize, Serialize};

/// Placeholder when the source reports no sector.
pub const UNKNOWN_SECTOR: &str = "Unknown";

/// Placeholder when the source reports no business summary.
pub const NO_SUMMARY: &str = "No summary available.";

const TRUNCATION_MARKER: &str = "...";

/// A complete, defaulted quote record with its valuation attached.
/// Computed fresh from a [`RawQuote`]; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentQuote {
    pub ticker: String,
    pub name: String,
    pub price: f64,
    pub previous_close: f64,
    pub eps: f64,
    pub book_value: f64,
    pub trailing_pe: f64,
    pub forward_pe: f64,
    pub market_cap: f64,
    pub sector: String,
    /// Dividend yield as a percentage, rounded to 2 decimals.
    pub dividend_yield_pct: f64,
    pub fifty_two_week_high: f64,
    pub fifty_two_week_low: f64,
    pub summary: String,
    pub intrinsic_value: f64,
    pub signal: Signal,
}

impl InstrumentQuote {
    /// Normalize raw fields into a complete record: numerics default to 0,
    /// the name defaults to the ticker, the summary is truncated to
    /// `summary_max` characters, then the valuation is derived from the
    /// normalized EPS, book value and price.
    pub fn from_raw(ticker: &str, raw: &RawQuote, summary_max: usize) -> Self {
        let price = raw.price.unwrap_or(0.0);
        let eps = raw.eps.unwrap_or(0.0);
        let book_value = raw.book_value.unwrap_or(0.0);

        let valuation = evaluate(eps, book_value, price);

        Self {
            ticker: ticker.to_string(),
            name: raw.name.clone().unwrap_or_else(|| ticker.to_string()),
            price,
            previous_close: raw.previous_close.unwrap_or(0.0),
            eps,
            book_value,
            trailing_pe: raw.trailing_pe.unwrap_or(0.0),
            forward_pe: raw.forward_pe.unwrap_or(0.0),
            market_cap: raw.market_cap.unwrap_or(0.0),
            sector: raw
                .sector
                .clone()
                .unwrap_or_else(|| UNKNOWN_SECTOR.to_string()),
            dividend_yield_pct: raw
                .dividend_yield
                .map(|y| round2(y * 100.0))
                .unwrap_or(0.0),
            fifty_two_week_high: raw.fifty_two_week_high.unwrap_or(0.0),
            fifty_two_week_low: raw.fifty_two_week_low.unwrap_or(0.0),
            summary: truncate_summary(
                raw.summary.as_deref().unwrap_or(NO_SUMMARY),
                summary_max,
            ),
            intrinsic_value: valuation.intrinsic_value,
            signal: valuation.signal,
        }
    }

    /// Day change against the previous close, as a percentage.
    /// 0 when the previous close is unknown.
    pub fn day_change_pct(&self) -> f64 {
        if self.previous_close > 0.0 {
            round2((self.price - self.previous_close) / self.previous_close * 100.0)
        } else {
            0.0
        }
    }
}

/// Cap a summary at `max` characters, appending a marker when cut.
/// The output never exceeds `max`, so re-truncating is a no-op.
fn truncate_summary(text: &str, max: usize) -> String {
    let count = text.chars().count();
    if count <= max || max <= TRUNCATION_MARKER.len() {
        return text.to_string();
    }
    let keep = max - TRUNCATION_MARKER.len();
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(TRUNCATION_MARKER);
    out
}
