//! Indodax REST ticker client
//!
//! Polls `GET /api/ticker/<pair>` and extracts `ticker.last`. The exchange
//! returns prices as JSON strings, but a plain number is accepted too.

use super::{PriceSample, PriceSource};
use crate::config::DEFAULT_ENDPOINT;
use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;

/// Per-request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the ticker client
#[derive(Debug, Clone)]
pub struct TickerClientConfig {
    /// Full ticker URL
    pub url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for TickerClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl TickerClientConfig {
    /// Create a config for the given URL with the default timeout
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout
    pub fn timeout(mut self, d: Duration) -> Self {
        self.timeout = d;
        self
    }
}

/// Top-level ticker response
#[derive(Debug, Deserialize)]
struct TickerResponse {
    ticker: TickerBody,
}

/// Only the last traded price is used; other fields are ignored
#[derive(Debug, Deserialize)]
struct TickerBody {
    last: PriceField,
}

/// Indodax quotes prices as strings; tolerate bare numbers as well
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PriceField {
    Text(String),
    Number(serde_json::Number),
}

impl PriceField {
    fn as_text(&self) -> String {
        match self {
            PriceField::Text(s) => s.trim().to_string(),
            PriceField::Number(n) => n.to_string(),
        }
    }
}

/// Client for the Indodax public ticker
pub struct IndodaxClient {
    config: TickerClientConfig,
    client: Client,
}

impl IndodaxClient {
    /// Create a client with custom configuration
    pub fn with_config(config: TickerClientConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("btc-ticker/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { config, client })
    }

    /// Configured ticker URL
    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Parse a ticker body into a whole-unit price
    ///
    /// Fractional prices are truncated toward zero before anything else sees
    /// them, so percentage changes are computed on the truncated values.
    pub fn parse_ticker(body: &str) -> Result<i64, FetchError> {
        let price = Self::parse_price(body)?;

        price
            .trunc()
            .to_i64()
            .ok_or_else(|| FetchError::Parse(format!("price {} out of range", price)))
    }

    /// Exact quoted price, fraction included
    fn parse_price(body: &str) -> Result<Decimal, FetchError> {
        let response: TickerResponse = serde_json::from_str(body)?;
        let text = response.ticker.last.as_text();

        Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .map_err(|_| FetchError::Parse(format!("non-numeric price {:?}", text)))
    }
}

#[async_trait]
impl PriceSource for IndodaxClient {
    async fn fetch_once(&self) -> Result<PriceSample, FetchError> {
        tracing::debug!(url = %self.config.url, "Fetching ticker");

        let response = self.client.get(&self.config.url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let value = Self::parse_ticker(&body)?;

        Ok(PriceSample::now(value))
    }
}
