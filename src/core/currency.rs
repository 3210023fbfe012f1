//! Currency conversion abstractions

use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait CurrencyConverter: Send + Sync {
    /// Converts `amount` of `from` into `to` at the latest quoted rate.
    async fn convert(&self, from: &str, to: &str, amount: f64) -> Result<f64>;
}
