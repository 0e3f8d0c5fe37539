//! Advisor Configuration
//!
//! Read from environment variables (a `.env` file is loaded by the binary).

use std::sync::Arc;
use std::time::Duration;

use crate::advisor::Advisor;
use crate::error::{AdvisorError, Result};
use crate::market::{CoinGeckoClient, MarketDataSource, MockMarketSource};
use crate::phrasing::{PhrasePicker, SeededPicker};
use crate::provider::{CoinDataProvider, default_coin_ids};

pub const DEFAULT_NAME: &str = "EcoCrypto";

/// Which market feed backs the refresh command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MarketSourceKind {
    CoinGecko,
    Mock,
}

impl std::str::FromStr for MarketSourceKind {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "coingecko" => Ok(Self::CoinGecko),
            "mock" => Ok(Self::Mock),
            other => Err(AdvisorError::Config(format!("unknown market data source '{other}'"))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AdvisorConfig {
    /// Display name used in greetings and prompts
    pub name: String,

    pub source: MarketSourceKind,

    /// CoinGecko API root
    pub base_url: String,

    /// Feed ids to request on refresh
    pub coin_ids: Vec<String>,

    /// Request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,

    /// Pull live data before the first prompt
    pub refresh_on_start: bool,

    /// Fixed seed for reproducible phrasing
    pub phrase_seed: Option<u64>,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.into(),
            source: MarketSourceKind::CoinGecko,
            base_url: crate::market::DEFAULT_BASE_URL.into(),
            coin_ids: default_coin_ids(),
            timeout: None,
            refresh_on_start: false,
            phrase_seed: None,
        }
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

impl AdvisorConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (environment, test map, ...)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let source = lookup("MARKET_DATA_SOURCE")
            .map(|s| s.parse::<MarketSourceKind>())
            .transpose()?
            .unwrap_or(defaults.source);

        let timeout = lookup("MARKET_DATA_TIMEOUT_SECS")
            .map(|s| {
                s.trim()
                    .parse::<u64>()
                    .map(Duration::from_secs)
                    .map_err(|e| AdvisorError::Config(format!("MARKET_DATA_TIMEOUT_SECS: {e}")))
            })
            .transpose()?;

        let phrase_seed = lookup("PHRASE_SEED")
            .map(|s| {
                s.trim()
                    .parse::<u64>()
                    .map_err(|e| AdvisorError::Config(format!("PHRASE_SEED: {e}")))
            })
            .transpose()?;

        let coin_ids = lookup("COINGECKO_COIN_IDS")
            .map(|s| {
                s.split(',')
                    .map(|id| id.trim().to_lowercase())
                    .filter(|id| !id.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|ids| !ids.is_empty())
            .unwrap_or(defaults.coin_ids);

        Ok(Self {
            name: lookup("ADVISOR_NAME")
                .filter(|n| !n.trim().is_empty())
                .unwrap_or(defaults.name),
            source,
            base_url: lookup("COINGECKO_BASE_URL").unwrap_or(defaults.base_url),
            coin_ids,
            timeout,
            refresh_on_start: lookup("REFRESH_ON_START").is_some_and(|v| parse_bool(&v)),
            phrase_seed,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    fn market_source(&self) -> Result<Arc<dyn MarketDataSource>> {
        let source: Arc<dyn MarketDataSource> = match (&self.source, self.timeout) {
            (MarketSourceKind::Mock, _) => Arc::new(MockMarketSource::new()),
            (MarketSourceKind::CoinGecko, Some(timeout)) => {
                Arc::new(CoinGeckoClient::with_timeout(&self.base_url, timeout)?)
            }
            (MarketSourceKind::CoinGecko, None) => Arc::new(CoinGeckoClient::new(&self.base_url)),
        };
        Ok(source)
    }

    fn picker(&self) -> Box<dyn PhrasePicker> {
        Box::new(
            self.phrase_seed
                .map_or_else(SeededPicker::from_entropy, SeededPicker::seeded),
        )
    }

    /// Assemble an advisor holding the built-in table
    pub fn build(&self) -> Result<Advisor> {
        let provider = CoinDataProvider::new(self.market_source()?, self.coin_ids.clone());
        Ok(Advisor::with_picker(&self.name, provider, self.picker()))
    }
}
