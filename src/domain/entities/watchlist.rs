use serde::{Deserialize, Serialize};

/// A tracked ticker. The watchlist is a bare sequence of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistEntry {
    pub ticker: String,
}

impl WatchlistEntry {
    pub fn new(ticker: String) -> Result<Self, String> {
        let ticker = ticker.trim().to_uppercase();
        if ticker.is_empty() {
            return Err("Ticker must not be empty".to_string());
        }
        Ok(Self { ticker })
    }
}
