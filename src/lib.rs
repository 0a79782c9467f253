//! btc-ticker: live BTC/IDR price dashboard for the terminal
//!
//! This library provides the components for:
//! - Polling the Indodax REST ticker on a fixed interval
//! - Tracking the latest price and its change against the previous poll
//! - Rendering a ratatui dashboard with connectivity status
//! - Logging and metrics

pub mod cli;
pub mod config;
pub mod error;
pub mod feed;
pub mod presenter;
pub mod telemetry;
