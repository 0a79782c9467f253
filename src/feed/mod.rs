//! Price feed module
//!
//! Polls the Indodax REST ticker on a fixed interval and reports each outcome

mod indodax;
mod poller;
mod stop;
mod types;

pub use indodax::{IndodaxClient, TickerClientConfig, REQUEST_TIMEOUT};
pub use poller::{Poller, POLL_INTERVAL};
pub use stop::{stop_signal, StopHandle, StopSignal};
pub use types::{PollEvent, PriceSample};

use crate::error::FetchError;
use async_trait::async_trait;

/// Trait for one-shot price sources
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Perform a single fetch-and-parse cycle
    async fn fetch_once(&self) -> Result<PriceSample, FetchError>;
}
