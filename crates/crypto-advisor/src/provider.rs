//! Coin Data Provider
//!
//! Owns the current [`CoinTable`] snapshot. Starts from the built-in table and
//! swaps in a freshly built table on every refresh. A failed refresh swaps the
//! built-in table back in; callers only ever see the boolean outcome.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::error::{AdvisorError, Result};
use crate::market::{MarketDataSource, MarketQuote};
use crate::model::{CoinRecord, CoinTable, DataSource, MarketCapTier, PriceTrend};

/// Energy label and score for coins we have sustainability data on
struct SustainabilityProfile {
    id: &'static str,
    name: &'static str,
    energy_use: &'static str,
    score: f64,
}

const PROFILES: &[SustainabilityProfile] = &[
    SustainabilityProfile { id: "bitcoin", name: "Bitcoin", energy_use: "high", score: 0.3 },
    SustainabilityProfile { id: "ethereum", name: "Ethereum", energy_use: "medium", score: 0.6 },
    SustainabilityProfile { id: "cardano", name: "Cardano", energy_use: "low", score: 0.8 },
    SustainabilityProfile { id: "solana", name: "Solana", energy_use: "low", score: 0.75 },
    SustainabilityProfile { id: "polkadot", name: "Polkadot", energy_use: "low", score: 0.7 },
    SustainabilityProfile { id: "algorand", name: "Algorand", energy_use: "very low", score: 0.9 },
];

pub const UNKNOWN_ENERGY_USE: &str = "unknown";
pub const UNKNOWN_SUSTAINABILITY: f64 = 0.5;

/// Feed ids for every coin in the built-in table
pub fn default_coin_ids() -> Vec<String> {
    PROFILES.iter().map(|p| p.id.to_string()).collect()
}

/// Built-in table used at startup and whenever the live feed fails
pub fn static_table() -> CoinTable {
    use MarketCapTier::{High, Low, Medium};
    use PriceTrend::{Rising, Stable};

    let buckets = [
        ("Bitcoin", Rising, High),
        ("Ethereum", Stable, High),
        ("Cardano", Rising, Medium),
        ("Solana", Rising, Medium),
        ("Polkadot", Stable, Medium),
        ("Algorand", Stable, Low),
    ];

    let records = buckets.into_iter().filter_map(|(name, trend, cap)| {
        PROFILES
            .iter()
            .find(|p| p.name == name)
            .map(|p| CoinRecord::new(name, trend, cap, p.energy_use, p.score))
    });

    CoinTable::new(records, DataSource::Static)
}

fn profile_for(quote: &MarketQuote) -> Option<&'static SustainabilityProfile> {
    PROFILES
        .iter()
        .find(|p| p.id.eq_ignore_ascii_case(&quote.id) || p.name.eq_ignore_ascii_case(&quote.name))
}

/// Bucket a live quote into a record, enriching it with sustainability data
pub fn record_from_quote(quote: &MarketQuote) -> CoinRecord {
    let (energy_use, score) = profile_for(quote)
        .map_or((UNKNOWN_ENERGY_USE, UNKNOWN_SUSTAINABILITY), |p| (p.energy_use, p.score));

    let mut record = CoinRecord::new(
        quote.name.clone(),
        PriceTrend::from_change(quote.price_change_percentage_24h),
        MarketCapTier::from_market_cap(quote.market_cap),
        energy_use,
        score,
    );
    record.current_price = quote.current_price;
    record.price_change_24h = quote.price_change_percentage_24h;
    record.market_cap_value = quote.market_cap;
    record
}

/// Holds the single table snapshot and the feed used to rebuild it
pub struct CoinDataProvider {
    source: Arc<dyn MarketDataSource>,
    coin_ids: Vec<String>,
    table: Arc<CoinTable>,
}

impl CoinDataProvider {
    pub fn new(source: Arc<dyn MarketDataSource>, coin_ids: Vec<String>) -> Self {
        Self {
            source,
            coin_ids,
            table: Arc::new(static_table()),
        }
    }

    /// Current snapshot
    pub fn load(&self) -> Arc<CoinTable> {
        Arc::clone(&self.table)
    }

    /// Rebuild the table from the live feed.
    ///
    /// Returns `false` and reinstates the built-in table on any failure.
    pub async fn refresh(&mut self) -> bool {
        match self.fetch_table().await {
            Ok(table) => {
                info!(
                    "Refreshed {} coins from {}",
                    table.len(),
                    self.source.name()
                );
                self.table = Arc::new(table);
                true
            }
            Err(e) => {
                warn!("Refresh from {} failed, using built-in data: {}", self.source.name(), e);
                self.table = Arc::new(static_table());
                false
            }
        }
    }

    async fn fetch_table(&self) -> Result<CoinTable> {
        let quotes = self.source.fetch_markets(&self.coin_ids).await?;
        if quotes.is_empty() {
            return Err(AdvisorError::EmptyMarketData);
        }

        let records = quotes.iter().map(record_from_quote);
        Ok(CoinTable::new(records, DataSource::Live).with_refreshed_at(Utc::now()))
    }

    /// Name of the configured feed
    pub fn source_name(&self) -> &str {
        self.source.name()
    }
}
