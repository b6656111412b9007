use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "assetdesk",
    about = "Personal market dashboard with Graham-number value screening"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show one instrument's normalized quote and valuation
    Quote {
        /// Exchange-qualified symbol (e.g. INFY.NS)
        ticker: String,
    },
    /// Show an instrument's price history as OHLC bars
    History {
        ticker: String,
        /// Lookback window (1d, 5d, 1mo, 3mo, 6mo, 1y, 5y)
        #[arg(long, default_value = "1mo")]
        range: String,
    },
    /// Show recent headlines for an instrument
    News { ticker: String },
    /// Scan the watchlist for live quotes and signals
    Watch,
    /// Add a ticker to the watchlist
    WatchAdd { ticker: String },
    /// Remove a ticker from the watchlist
    WatchRemove { ticker: String },
    /// Scan the fixed universe for undervalued instruments
    Scan {
        /// Write the full scan to a CSV file instead of printing it
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Value all holdings at live prices
    Portfolio,
    /// Record a new lot
    PortfolioAdd {
        ticker: String,
        quantity: u32,
        avg_price: f64,
    },
    /// Delete all holdings
    PortfolioClear,
    /// Day change for the configured passive assets
    Trackers,
    /// Project a monthly savings plan
    Sip {
        /// Amount invested each month
        monthly: f64,
        /// Expected annual return, percent
        #[arg(long, default_value = "12.0")]
        annual_return: f64,
        #[arg(long, default_value = "10")]
        years: u32,
    },
}
