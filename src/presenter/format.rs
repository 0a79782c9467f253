//! Price, change and time formatting

use crate::config::DisplayConfig;
use chrono::{DateTime, TimeZone};

/// Locale settings for amounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFormat {
    pub currency_prefix: String,
    pub thousands_separator: char,
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self {
            currency_prefix: "Rp".to_string(),
            thousands_separator: '.',
        }
    }
}

impl From<&DisplayConfig> for PriceFormat {
    fn from(config: &DisplayConfig) -> Self {
        Self {
            currency_prefix: config.currency_prefix.clone(),
            thousands_separator: config.thousands_separator,
        }
    }
}

impl PriceFormat {
    /// Group the digits of `value` in threes
    pub fn group_digits(&self, value: u64) -> String {
        let digits = value.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);

        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(self.thousands_separator);
            }
            out.push(ch);
        }
        out
    }

    /// `Rp 1.050.000`
    pub fn price(&self, value: i64) -> String {
        let sign = if value < 0 { "-" } else { "" };
        format!(
            "{}{} {}",
            sign,
            self.currency_prefix,
            self.group_digits(value.unsigned_abs())
        )
    }

    /// `+Rp 50.000 (+5.00%)`, `-Rp 50.000 (-5.00%)`, `Rp 0 (0.00%)`
    pub fn change(&self, delta: i64, delta_percent: f64) -> String {
        let sign = match delta {
            d if d > 0 => "+",
            d if d < 0 => "-",
            _ => "",
        };
        format!(
            "{sign}{} {} ({sign}{:.2}%)",
            self.currency_prefix,
            self.group_digits(delta.unsigned_abs()),
            delta_percent.abs()
        )
    }
}

/// `HH:MM:SS`
pub fn clock_time<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%H:%M:%S").to_string()
}

/// Placeholder shown until the first sample, with 0-3 trailing dots
pub fn loading_text(frame: usize) -> String {
    format!("Loading{}", ".".repeat(frame % 4))
}
