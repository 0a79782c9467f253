//! Telemetry module
//!
//! Logging and metrics

mod logging;
mod metrics;

pub use self::logging::{init_logging, LogFormat, LogTarget};
pub use self::metrics::{record_fetch_outcome, record_latency, set_gauge, GaugeMetric, LatencyMetric};

use crate::config::TelemetryConfig;

/// Initialize all telemetry subsystems
///
/// `fallback` is used when the configuration does not name a log file.
pub fn init_telemetry(config: &TelemetryConfig, fallback: LogTarget) -> anyhow::Result<()> {
    let target = match config.log_file {
        Some(ref path) => LogTarget::File(path.clone()),
        None => fallback,
    };
    let format = if config.json {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };

    init_logging(&config.log_level, format, &target)
}
