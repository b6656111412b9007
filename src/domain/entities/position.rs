use serde::{Deserialize, Serialize};

/// A held lot: ticker, share count and average acquisition price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioPosition {
    pub ticker: String,
    pub quantity: u32,
    pub avg_price: f64,
}

impl PortfolioPosition {
    pub fn new(ticker: String, quantity: u32, avg_price: f64) -> Result<Self, String> {
        let ticker = ticker.trim().to_uppercase();
        if ticker.is_empty() {
            return Err("Ticker must not be empty".to_string());
        }
        if quantity == 0 {
            return Err("Quantity must be positive".to_string());
        }
        if avg_price <= 0.0 {
            return Err(format!("Average price must be positive, got {avg_price}"));
        }
        Ok(Self {
            ticker,
            quantity,
            avg_price,
        })
    }

    /// Capital deployed into this lot.
    pub fn invested(&self) -> f64 {
        self.quantity as f64 * self.avg_price
    }
}
