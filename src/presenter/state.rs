//! Display state owned by the presenter

use crate::error::ErrorKind;
use crate::feed::PriceSample;

/// Health of the most recent poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityStatus {
    #[default]
    Live,
    Error,
    NoConnection,
}

impl ConnectivityStatus {
    /// Status reached after a failed poll of the given kind
    pub fn from_error(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Http | ErrorKind::Parse => ConnectivityStatus::Error,
            ErrorKind::Connectivity => ConnectivityStatus::NoConnection,
        }
    }

    /// Indicator text
    pub fn label(&self) -> &'static str {
        match self {
            ConnectivityStatus::Live => "●  Live",
            ConnectivityStatus::Error => "●  Error",
            ConnectivityStatus::NoConnection => "●  No Connection",
        }
    }
}

/// Direction of the latest move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// Current and previous samples plus the change between them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceState {
    current: Option<PriceSample>,
    previous: Option<PriceSample>,
    delta: i64,
    delta_percent: f64,
}

impl PriceState {
    /// Empty state, as at process start
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift current to previous and install `sample`
    ///
    /// Returns the trend of the move, or `None` for the very first sample.
    pub fn apply(&mut self, sample: PriceSample) -> Option<Trend> {
        self.previous = self.current.replace(sample);

        let previous = self.previous?;
        self.delta = sample.value.saturating_sub(previous.value);
        self.delta_percent = if previous.value == 0 {
            0.0
        } else {
            self.delta as f64 / previous.value as f64 * 100.0
        };

        Some(match self.delta {
            d if d > 0 => Trend::Up,
            d if d < 0 => Trend::Down,
            _ => Trend::Flat,
        })
    }

    pub fn current(&self) -> Option<&PriceSample> {
        self.current.as_ref()
    }

    pub fn previous(&self) -> Option<&PriceSample> {
        self.previous.as_ref()
    }

    /// `current - previous`, 0 until two samples have been seen
    pub fn delta(&self) -> i64 {
        self.delta
    }

    /// Delta as a percentage of the previous price
    pub fn delta_percent(&self) -> f64 {
        self.delta_percent
    }

    /// Whether any sample has arrived yet
    pub fn has_sample(&self) -> bool {
        self.current.is_some()
    }
}
