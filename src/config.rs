use std::path::PathBuf;
use std::time::Duration;

/// Immutable application configuration, resolved once at startup and
/// passed to the scan drivers explicitly.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub watchlist_path: PathBuf,
    pub portfolio_path: PathBuf,
    /// Fixed universe scanned by the deep-value scanner.
    pub universe: Vec<String>,
    /// (label, ticker) pairs for the passive-asset trackers.
    pub trackers: Vec<(String, String)>,
    /// Memoization window for quote/history lookups. Zero disables it.
    pub cache_ttl: Duration,
    /// Business summaries are truncated to this many characters.
    pub summary_max_chars: usize,
}

/// Large-cap NSE universe scanned by default.
const DEFAULT_UNIVERSE: [&str; 30] = [
    "RELIANCE.NS",
    "TCS.NS",
    "HDFCBANK.NS",
    "ICICIBANK.NS",
    "INFY.NS",
    "BHARTIARTL.NS",
    "ITC.NS",
    "SBIN.NS",
    "LICI.NS",
    "HINDUNILVR.NS",
    "LT.NS",
    "BAJFINANCE.NS",
    "HCLTECH.NS",
    "MARUTI.NS",
    "SUNPHARMA.NS",
    "TITAN.NS",
    "ULTRACEMCO.NS",
    "TATAMOTORS.NS",
    "ASIANPAINT.NS",
    "AXISBANK.NS",
    "NTPC.NS",
    "POWERGRID.NS",
    "M&M.NS",
    "ONGC.NS",
    "WIPRO.NS",
    "ADANIENT.NS",
    "JSWSTEEL.NS",
    "COALINDIA.NS",
    "TATASTEEL.NS",
    "BAJAJFINSV.NS",
];

/// Index and commodity ETFs tracked on the passive page.
const DEFAULT_TRACKERS: [(&str, &str); 6] = [
    ("Nifty 50", "NIFTYBEES.NS"),
    ("Nifty Next 50", "JUNIORBEES.NS"),
    ("Gold", "GOLDBEES.NS"),
    ("Silver", "SILVERBEES.NS"),
    ("Bank Nifty", "BANKBEES.NS"),
    ("IT Sector", "ITBEES.NS"),
];

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            watchlist_path: PathBuf::from("my_watchlist.csv"),
            portfolio_path: PathBuf::from("my_portfolio.csv"),
            universe: DEFAULT_UNIVERSE.iter().map(|t| t.to_string()).collect(),
            trackers: DEFAULT_TRACKERS
                .iter()
                .map(|(label, ticker)| (label.to_string(), ticker.to_string()))
                .collect(),
            cache_ttl: Duration::from_secs(600),
            summary_max_chars: 400,
        }
    }
}

impl AppConfig {
    /// Defaults with `ASSETDESK_*` environment overrides for the file
    /// paths and cache window.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(path) = std::env::var("ASSETDESK_WATCHLIST") {
            config.watchlist_path = PathBuf::from(path);
        }
        if let Ok(path) = std::env::var("ASSETDESK_PORTFOLIO") {
            config.portfolio_path = PathBuf::from(path);
        }
        if let Ok(secs) = std::env::var("ASSETDESK_CACHE_TTL_SECS") {
            if let Ok(secs) = secs.parse::<u64>() {
                config.cache_ttl = Duration::from_secs(secs);
            }
        }
        config
    }
}
