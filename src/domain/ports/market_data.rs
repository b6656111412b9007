use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raw per-instrument fields as the external source reports them.
/// Any field may be absent; normalization fills the gaps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawQuote {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub previous_close: Option<f64>,
    pub eps: Option<f64>,
    pub book_value: Option<f64>,
    pub trailing_pe: Option<f64>,
    pub forward_pe: Option<f64>,
    pub market_cap: Option<f64>,
    pub sector: Option<String>,
    /// Dividend yield as a fraction (0.0123 = 1.23%).
    pub dividend_yield: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub summary: Option<String>,
}

/// One period of an instrument's price history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OhlcBar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: Option<u64>,
}

/// A headline attached to an instrument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    pub publisher: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

/// Lookback window for a history request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryRange {
    Day,
    Week,
    Month,
    Quarter,
    HalfYear,
    Year,
    FiveYears,
}

impl fmt::Display for HistoryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryRange::Day => write!(f, "1d"),
            HistoryRange::Week => write!(f, "5d"),
            HistoryRange::Month => write!(f, "1mo"),
            HistoryRange::Quarter => write!(f, "3mo"),
            HistoryRange::HalfYear => write!(f, "6mo"),
            HistoryRange::Year => write!(f, "1y"),
            HistoryRange::FiveYears => write!(f, "5y"),
        }
    }
}

impl FromStr for HistoryRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1d" | "day" => Ok(HistoryRange::Day),
            "5d" | "week" => Ok(HistoryRange::Week),
            "1mo" | "month" => Ok(HistoryRange::Month),
            "3mo" | "quarter" => Ok(HistoryRange::Quarter),
            "6mo" => Ok(HistoryRange::HalfYear),
            "1y" | "year" => Ok(HistoryRange::Year),
            "5y" => Ok(HistoryRange::FiveYears),
            _ => Err(format!(
                "Unknown range: {s}. Use 1d, 5d, 1mo, 3mo, 6mo, 1y or 5y"
            )),
        }
    }
}

/// External source of quotes, price history and news.
#[async_trait]
pub trait MarketData: Send + Sync {
    /// Human-readable name of this source.
    fn name(&self) -> &str;

    /// Fetch raw quote fields for one ticker.
    async fn quote(&self, ticker: &str) -> Result<RawQuote, MarketDataError>;

    /// Fetch an ordered price history for one ticker.
    async fn history(
        &self,
        ticker: &str,
        range: HistoryRange,
    ) -> Result<Vec<OhlcBar>, MarketDataError>;

    /// Fetch recent headlines for one ticker.
    async fn news(&self, ticker: &str) -> Result<Vec<NewsItem>, MarketDataError>;
}

#[derive(Debug)]
pub enum MarketDataError {
    /// HTTP or network error
    Network(String),
    /// Response parsing error
    Parse(String),
    /// Source has no data for the ticker
    NotFound(String),
}

impl fmt::Display for MarketDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketDataError::Network(msg) => write!(f, "Network error: {msg}"),
            MarketDataError::Parse(msg) => write!(f, "Parse error: {msg}"),
            MarketDataError::NotFound(msg) => write!(f, "Not found: {msg}"),
        }
    }
}

impl std::error::Error for MarketDataError {}
