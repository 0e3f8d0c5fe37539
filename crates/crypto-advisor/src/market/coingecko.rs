//! CoinGecko Market Client
//!
//! Pulls price, 24h change and market cap from the public `/coins/markets`
//! endpoint.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::{MarketDataSource, MarketQuote};
use crate::error::{AdvisorError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

pub struct CoinGeckoClient {
    client: reqwest::Client,
    base_url: String,
}

impl CoinGeckoClient {
    /// Client without a request timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn markets_url(&self) -> String {
        format!("{}/coins/markets", self.base_url)
    }

    /// Decode a `/coins/markets` response body
    pub fn parse_markets(body: &str) -> Result<Vec<MarketQuote>> {
        Ok(serde_json::from_str(body)?)
    }
}

impl Default for CoinGeckoClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl MarketDataSource for CoinGeckoClient {
    async fn fetch_markets(&self, ids: &[String]) -> Result<Vec<MarketQuote>> {
        let url = self.markets_url();
        let ids = ids.join(",");
        debug!("Fetching markets from CoinGecko: {} ids={}", url, ids);

        let response = self
            .client
            .get(&url)
            .query(&[("vs_currency", "usd"), ("ids", ids.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AdvisorError::MarketData(format!(
                "CoinGecko responded with {status}"
            )));
        }

        let body = response.text().await?;
        Self::parse_markets(&body)
    }

    async fn health_check(&self) -> bool {
        let url = format!("{}/ping", self.base_url);
        matches!(
            self.client.get(&url).send().await,
            Ok(response) if response.status().is_success()
        )
    }

    fn name(&self) -> &str {
        "CoinGecko"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_markets_payload() {
        let body = r#"[
            {
                "id": "bitcoin",
                "symbol": "btc",
                "name": "Bitcoin",
                "current_price": 97500,
                "market_cap": 1930000000000,
                "price_change_percentage_24h": 2.5,
                "total_volume": 25000000000
            },
            {
                "id": "algorand",
                "symbol": "algo",
                "name": "Algorand",
                "current_price": null,
                "market_cap": null,
                "price_change_percentage_24h": null
            }
        ]"#;

        let quotes = CoinGeckoClient::parse_markets(body).unwrap();
        assert_eq!(quotes.len(), 2);

        assert_eq!(quotes[0].id, "bitcoin");
        assert_eq!(quotes[0].current_price, Some(dec!(97500)));
        assert_eq!(quotes[0].market_cap, Some(dec!(1930000000000)));
        assert_eq!(quotes[0].price_change_percentage_24h, Some(dec!(2.5)));

        assert_eq!(quotes[1].name, "Algorand");
        assert!(quotes[1].current_price.is_none());
        assert!(quotes[1].market_cap.is_none());
    }

    #[test]
    fn test_parse_rejects_error_object() {
        let body = r#"{"status": {"error_code": 429, "error_message": "rate limited"}}"#;
        assert!(matches!(
            CoinGeckoClient::parse_markets(body),
            Err(AdvisorError::Serialization(_))
        ));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = CoinGeckoClient::new("http://localhost:9999/api/v3/");
        assert_eq!(client.markets_url(), "http://localhost:9999/api/v3/coins/markets");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let client = CoinGeckoClient::new("http://127.0.0.1:1");
        let result = client.fetch_markets(&["bitcoin".to_string()]).await;
        assert!(matches!(result, Err(AdvisorError::Network(_))));
        assert!(!client.health_check().await);
    }
}
