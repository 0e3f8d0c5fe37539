//! Mock Market Source
//!
//! For testing and offline demos. Returns realistic static quotes.

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{MarketDataSource, MarketQuote};
use crate::error::{AdvisorError, Result};

/// Mock market source with static quotes
pub struct MockMarketSource {
    /// Simulate an unreachable feed
    fail: bool,
}

impl Default for MockMarketSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMarketSource {
    pub fn new() -> Self {
        Self { fail: false }
    }

    /// Source whose every fetch errors
    pub fn failing() -> Self {
        Self { fail: true }
    }

    fn base_quote(id: &str) -> Option<(&'static str, Decimal, Decimal, Decimal)> {
        // (name, price, 24h_change, market_cap)
        match id {
            "bitcoin" => Some(("Bitcoin", dec!(97500), dec!(2.5), dec!(1_930_000_000_000))),
            "ethereum" => Some(("Ethereum", dec!(3450), dec!(1.8), dec!(415_000_000_000))),
            "solana" => Some(("Solana", dec!(195), dec!(4.2), dec!(94_000_000_000))),
            "cardano" => Some(("Cardano", dec!(0.95), dec!(-1.2), dec!(33_500_000_000))),
            "polkadot" => Some(("Polkadot", dec!(7.20), dec!(0.8), dec!(11_000_000_000))),
            "algorand" => Some(("Algorand", dec!(0.41), dec!(-2.3), dec!(3_400_000_000))),
            "dogecoin" => Some(("Dogecoin", dec!(0.38), dec!(12.0), dec!(56_000_000_000))),
            _ => None,
        }
    }
}

#[async_trait]
impl MarketDataSource for MockMarketSource {
    async fn fetch_markets(&self, ids: &[String]) -> Result<Vec<MarketQuote>> {
        if self.fail {
            return Err(AdvisorError::MarketData("mock source offline".into()));
        }

        Ok(ids
            .iter()
            .filter_map(|id| {
                Self::base_quote(id).map(|(name, price, change, cap)| MarketQuote {
                    id: id.clone(),
                    name: name.into(),
                    current_price: Some(price),
                    price_change_percentage_24h: Some(change),
                    market_cap: Some(cap),
                })
            })
            .collect())
    }

    async fn health_check(&self) -> bool {
        !self.fail
    }

    fn name(&self) -> &str {
        "MockMarket"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_market() {
        let source = MockMarketSource::new();
        let quotes = source
            .fetch_markets(&["bitcoin".to_string(), "notreal".to_string()])
            .await
            .unwrap();

        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].name, "Bitcoin");
        assert!(quotes[0].current_price.unwrap() > Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_failing_mock() {
        let source = MockMarketSource::failing();
        assert!(source.fetch_markets(&["bitcoin".to_string()]).await.is_err());
        assert!(!source.health_check().await);
    }
}
