//! Domain Models
//!
//! Coin records and the immutable table snapshot the advisor reasons over.
//! Uses `rust_decimal` for prices and market caps - never use f64 for money!

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Coarse direction of the last 24h of price movement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Rising,
    Stable,
    Falling,
}

impl PriceTrend {
    /// Percentage move (either way) beyond which a coin is no longer stable
    pub const THRESHOLD_PERCENT: Decimal = dec!(1.5);

    /// Bucket a 24h percentage change. Missing data counts as stable.
    pub fn from_change(change_24h: Option<Decimal>) -> Self {
        match change_24h {
            Some(c) if c > Self::THRESHOLD_PERCENT => Self::Rising,
            Some(c) if c < -Self::THRESHOLD_PERCENT => Self::Falling,
            _ => Self::Stable,
        }
    }

    /// Weight used by the balanced recommendation
    pub const fn score(self) -> f64 {
        match self {
            Self::Rising => 2.0,
            Self::Stable => 1.0,
            Self::Falling => 0.0,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rising => "rising",
            Self::Stable => "stable",
            Self::Falling => "falling",
        }
    }
}

impl fmt::Display for PriceTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Market capitalization bucket
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketCapTier {
    High,
    Medium,
    Low,
}

impl MarketCapTier {
    pub const HIGH_THRESHOLD: Decimal = dec!(50_000_000_000);
    pub const MEDIUM_THRESHOLD: Decimal = dec!(10_000_000_000);

    /// Bucket a USD market cap. Missing data counts as low.
    pub fn from_market_cap(market_cap: Option<Decimal>) -> Self {
        match market_cap {
            Some(m) if m > Self::HIGH_THRESHOLD => Self::High,
            Some(m) if m > Self::MEDIUM_THRESHOLD => Self::Medium,
            _ => Self::Low,
        }
    }

    /// Ranking used by the profitability recommendation
    pub const fn priority(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    /// Weight used by the balanced recommendation
    pub const fn score(self) -> f64 {
        match self {
            Self::High => 2.0,
            Self::Medium => 1.0,
            Self::Low => 0.5,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for MarketCapTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-coin snapshot the strategies score
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoinRecord {
    /// Display name, unique within a table (e.g., "Cardano")
    pub name: String,

    pub price_trend: PriceTrend,

    pub market_cap: MarketCapTier,

    /// Free-form energy label (e.g., "very low")
    pub energy_use: String,

    /// 0.0 (worst) to 1.0 (greenest)
    pub sustainability_score: f64,

    /// Current price in USD
    #[serde(default)]
    pub current_price: Option<Decimal>,

    /// 24-hour price change percentage
    #[serde(default)]
    pub price_change_24h: Option<Decimal>,

    /// Market capitalization in USD
    #[serde(default)]
    pub market_cap_value: Option<Decimal>,
}

impl CoinRecord {
    /// Record without live market fields
    pub fn new(
        name: impl Into<String>,
        price_trend: PriceTrend,
        market_cap: MarketCapTier,
        energy_use: impl Into<String>,
        sustainability_score: f64,
    ) -> Self {
        Self {
            name: name.into(),
            price_trend,
            market_cap,
            energy_use: energy_use.into(),
            sustainability_score: sustainability_score.clamp(0.0, 1.0),
            current_price: None,
            price_change_24h: None,
            market_cap_value: None,
        }
    }

    /// Sustainability on the 0-10 scale shown to users
    pub fn sustainability_out_of_ten(&self) -> f64 {
        self.sustainability_score * 10.0
    }
}

/// Where a table's records came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Static,
    Live,
}

/// Immutable snapshot of every known coin, keyed and ordered by name
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoinTable {
    records: BTreeMap<String, CoinRecord>,
    pub source: DataSource,
    pub refreshed_at: Option<DateTime<Utc>>,
}

impl CoinTable {
    pub fn new(records: impl IntoIterator<Item = CoinRecord>, source: DataSource) -> Self {
        Self {
            records: records.into_iter().map(|r| (r.name.clone(), r)).collect(),
            source,
            refreshed_at: None,
        }
    }

    pub fn with_refreshed_at(mut self, at: DateTime<Utc>) -> Self {
        self.refreshed_at = Some(at);
        self
    }

    pub fn get(&self, name: &str) -> Option<&CoinRecord> {
        self.records.get(name)
    }

    /// Records in name order
    pub fn iter(&self) -> impl Iterator<Item = &CoinRecord> {
        self.records.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
