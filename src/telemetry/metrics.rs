//! Metrics recorded through the `metrics` facade
//!
//! No exporter is installed by default, so these are no-ops unless a recorder
//! has been registered by the embedding process.

use crate::error::ErrorKind;
use std::time::Duration;

/// Latency metric types
#[derive(Debug, Clone, Copy)]
pub enum LatencyMetric {
    /// One ticker fetch, including parse
    TickerFetch,
    /// One dashboard frame draw
    FrameDraw,
}

/// Gauge metric types
#[derive(Debug, Clone, Copy)]
pub enum GaugeMetric {
    /// Last successfully polled price
    LastPrice,
}

/// Record a latency measurement
pub fn record_latency(metric: LatencyMetric, duration: Duration) {
    let metric_name = match metric {
        LatencyMetric::TickerFetch => "btcticker_fetch_latency_ms",
        LatencyMetric::FrameDraw => "btcticker_frame_draw_latency_ms",
    };

    metrics::histogram!(metric_name).record(duration.as_secs_f64() * 1000.0);
}

/// Set a gauge value
pub fn set_gauge(metric: GaugeMetric, value: f64) {
    let metric_name = match metric {
        GaugeMetric::LastPrice => "btcticker_last_price",
    };

    metrics::gauge!(metric_name).set(value);
}

/// Count one poll outcome; `None` is a success
pub fn record_fetch_outcome(failure: Option<ErrorKind>) {
    match failure {
        None => metrics::counter!("btcticker_polls_total", "outcome" => "ok").increment(1),
        Some(kind) => {
            metrics::counter!("btcticker_polls_total", "outcome" => kind.as_str()).increment(1)
        }
    }
}
