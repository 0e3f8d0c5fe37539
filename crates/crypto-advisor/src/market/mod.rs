//! Market Data Integration
//!
//! Abstractions and implementations for live cryptocurrency market feeds.

mod coingecko;
mod mock;

pub use coingecko::{CoinGeckoClient, DEFAULT_BASE_URL};
pub use mock::MockMarketSource;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One coin as reported by a market feed
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketQuote {
    /// Feed-specific identifier (e.g., "cardano")
    pub id: String,

    /// Display name (e.g., "Cardano")
    pub name: String,

    /// Current price in USD
    #[serde(default)]
    pub current_price: Option<Decimal>,

    /// 24-hour price change percentage
    #[serde(default)]
    pub price_change_percentage_24h: Option<Decimal>,

    /// Market capitalization in USD
    #[serde(default)]
    pub market_cap: Option<Decimal>,
}

/// Market data source trait (Strategy pattern)
///
/// Implement this for each feed: CoinGecko, CoinMarketCap, etc.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetch quotes for the given feed ids
    async fn fetch_markets(&self, ids: &[String]) -> Result<Vec<MarketQuote>>;

    /// Check if the feed is reachable
    async fn health_check(&self) -> bool;

    /// Source name
    fn name(&self) -> &str;
}
