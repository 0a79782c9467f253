//! Configuration types for btc-ticker
//!
//! Every field has a compiled-in default, so the dashboard runs without any
//! file. The polling interval and request timeout are fixed and deliberately
//! absent here.

use serde::Deserialize;
use std::path::PathBuf;

/// Public Indodax ticker for the BTC/IDR pair
pub const DEFAULT_ENDPOINT: &str = "https://indodax.com/api/ticker/btcidr";

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Price feed configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Ticker endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Exchange name shown on the dashboard
    #[serde(default = "default_exchange")]
    pub exchange: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}
fn default_exchange() -> String {
    "Indodax".to_string()
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            exchange: default_exchange(),
        }
    }
}

/// Price formatting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Currency prefix placed before every amount
    #[serde(default = "default_currency_prefix")]
    pub currency_prefix: String,

    /// Thousands separator (Indonesian locale uses '.')
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: char,
}

fn default_currency_prefix() -> String {
    "Rp".to_string()
}
fn default_thousands_separator() -> char {
    '.'
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_prefix: default_currency_prefix(),
            thousands_separator: default_thousands_separator(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log file used while the dashboard owns the terminal
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Emit JSON log lines instead of the human-readable format
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_file: None,
            json: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise fall back to defaults
    pub fn load_or_default(path: Option<&std::path::Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
