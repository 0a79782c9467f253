//! Price feed types

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One observed last-traded price
///
/// The value is a whole number of currency units (IDR has no minor unit on
/// the ticker); any fractional part reported by the exchange is truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSample {
    /// Last traded price
    pub value: i64,
    /// Local time the sample was taken
    pub observed_at: DateTime<Local>,
}

impl PriceSample {
    /// Create a sample stamped with the current local time
    pub fn now(value: i64) -> Self {
        Self {
            value,
            observed_at: Local::now(),
        }
    }

    /// Create a sample with an explicit timestamp
    pub fn at(value: i64, observed_at: DateTime<Local>) -> Self {
        Self { value, observed_at }
    }
}

/// Outcome of one poll, as handed from the worker to the UI loop
#[derive(Debug, Clone)]
pub enum PollEvent {
    Sample(PriceSample),
    Failed(crate::error::ErrorKind),
}
