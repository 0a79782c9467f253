//! Error types for ticker fetches

use thiserror::Error;

/// Classification of a failed poll, as seen by the presenter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Endpoint answered with something other than 200 OK
    Http,
    /// Endpoint could not be reached (DNS, refused, timeout)
    Connectivity,
    /// Body was not a usable ticker payload
    Parse,
}

impl ErrorKind {
    /// Metric/log label for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Http => "http",
            ErrorKind::Connectivity => "connectivity",
            ErrorKind::Parse => "parse",
        }
    }
}

/// A single failed fetch-and-parse cycle
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("Ticker endpoint returned HTTP {status}")]
    Http { status: u16 },

    #[error("Ticker endpoint unreachable: {0}")]
    Connectivity(String),

    #[error("Malformed ticker payload: {0}")]
    Parse(String),
}

impl FetchError {
    /// Coarse kind, dropping the detail
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Http { .. } => ErrorKind::Http,
            FetchError::Connectivity(_) => ErrorKind::Connectivity,
            FetchError::Parse(_) => ErrorKind::Parse,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Parse(err.to_string())
        } else {
            // Timeouts, refused connections, DNS failures and truncated bodies
            FetchError::Connectivity(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}
