use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification of an instrument's price against its Graham intrinsic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    /// Trading below estimated fair value.
    Buy,
    /// Trading at more than 150% of estimated fair value.
    Sell,
    /// Inside the fair-value band.
    Hold,
    /// Intrinsic value not computable (non-positive EPS or book value).
    Neutral,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Buy => write!(f, "buy"),
            Signal::Sell => write!(f, "sell"),
            Signal::Hold => write!(f, "hold"),
            Signal::Neutral => write!(f, "neutral"),
        }
    }
}

impl FromStr for Signal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "buy" => Ok(Signal::Buy),
            "sell" => Ok(Signal::Sell),
            "hold" => Ok(Signal::Hold),
            "neutral" => Ok(Signal::Neutral),
            _ => Err(format!("Unknown signal: {s}")),
        }
    }
}
