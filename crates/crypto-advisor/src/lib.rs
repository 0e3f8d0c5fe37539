//! # crypto-advisor
//!
//! Rule-based cryptocurrency advisor that weighs profit potential against
//! environmental impact.
//!
//! ## How a query is answered
//!
//! ```text
//! ┌──────────────┐   keywords   ┌──────────────┐   pure fn   ┌──────────────┐
//! │  user text   │─────────────▶│    Intent    │────────────▶│   strategy   │
//! └──────────────┘              └──────────────┘             └──────┬───────┘
//!                                                                   │
//!                  ┌──────────────────┐   Arc<CoinTable>            │
//!                  │ CoinDataProvider │─────────────────────────────┘
//!                  │ static | live    │◀── MarketDataSource (CoinGecko, mock)
//!                  └──────────────────┘
//! ```
//!
//! ## Strategies
//!
//! - **Sustainability** - highest sustainability score
//! - **Profitability** - largest market cap among coins trending up
//! - **Balanced** - 60% profit potential (trend, market cap), 40% sustainability
//! - **Info** - one coin's buckets, energy label and live figures
//! - **Prices** - every coin by market cap, with 24h change
//!
//! Ties always go to the first coin in name order.

pub mod advisor;
pub mod config;
pub mod error;
pub mod intent;
pub mod market;
pub mod model;
pub mod phrasing;
pub mod provider;
pub mod strategy;

pub use advisor::{Advisor, is_exit};
pub use config::AdvisorConfig;
pub use error::{AdvisorError, Result};
pub use intent::{Intent, classify};
pub use model::{CoinRecord, CoinTable, DataSource, MarketCapTier, PriceTrend};
pub use provider::CoinDataProvider;

/// Shown once at the start of every session
pub const DISCLAIMER: &str = "⚠️ DISCLAIMER: Cryptocurrency investments are risky. This bot provides \
    educational information only. Always do your own research before investing! ⚠️";
