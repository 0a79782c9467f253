//! Fixed-interval polling loop

use super::{PriceSample, PriceSource, StopSignal};
use crate::error::ErrorKind;
use crate::telemetry::{record_fetch_outcome, record_latency, set_gauge, GaugeMetric, LatencyMetric};
use std::time::{Duration, Instant};
use tokio::time::sleep;

/// Time between the end of one poll and the start of the next
pub const POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Drives a [`PriceSource`] on a fixed interval until stopped
pub struct Poller<S> {
    source: S,
    interval: Duration,
}

impl<S: PriceSource> Poller<S> {
    /// Create a poller using the fixed ten second interval
    pub fn new(source: S) -> Self {
        Self::with_interval(source, POLL_INTERVAL)
    }

    /// Create a poller with a custom interval (tests and tooling only)
    pub fn with_interval(source: S, interval: Duration) -> Self {
        Self { source, interval }
    }

    /// Polling interval
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run until `stop` is raised
    ///
    /// Each attempt ends in exactly one call to `on_sample` or `on_error`,
    /// unless the stop request lands while the fetch is in flight, in which
    /// case the fetch is abandoned and nothing is dispatched.
    pub async fn run<F, E>(&self, mut on_sample: F, mut on_error: E, mut stop: StopSignal)
    where
        F: FnMut(PriceSample),
        E: FnMut(ErrorKind),
    {
        tracing::info!(interval_secs = self.interval.as_secs_f64(), "Poller started");

        loop {
            if stop.is_raised() {
                break;
            }

            let started = Instant::now();
            let outcome = tokio::select! {
                biased;
                _ = stop.raised() => break,
                outcome = self.source.fetch_once() => outcome,
            };
            record_latency(LatencyMetric::TickerFetch, started.elapsed());

            if stop.is_raised() {
                tracing::debug!("Dropping poll result received after stop");
                break;
            }

            match outcome {
                Ok(sample) => {
                    tracing::debug!(price = sample.value, "Ticker sample");
                    record_fetch_outcome(None);
                    set_gauge(GaugeMetric::LastPrice, sample.value as f64);
                    on_sample(sample);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Ticker poll failed");
                    record_fetch_outcome(Some(e.kind()));
                    on_error(e.kind());
                }
            }

            tokio::select! {
                biased;
                _ = stop.raised() => break,
                _ = sleep(self.interval) => {}
            }
        }

        tracing::info!("Poller stopped");
    }
}
