//! Error Types
//!
//! Failures crossing the data and report service boundaries.

use thiserror::Error;

/// Data Access Service failure
///
/// Every variant displays only the underlying message; the view adds its own prefix.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    /// Network or request failure
    #[error("{0}")]
    Transport(String),
    /// Non-success HTTP status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    /// Response did not match the expected record shape
    #[error("{0}")]
    Decode(String),
    /// Rejection raised by the JS data bridge
    #[error("{0}")]
    Service(String),
}

impl From<reqwest::Error> for DataError {
    fn from(err: reqwest::Error) -> Self {
        DataError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        DataError::Decode(err.to_string())
    }
}

/// Report Service failure
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    #[error("report output unavailable: {0}")]
    Unavailable(String),
    #[error("report bridge error: {0}")]
    Bridge(String),
}
