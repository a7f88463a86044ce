//! Error types for the task client.

use thiserror::Error;

/// Errors that can occur when talking to the task service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport error (connection refused, timeout, invalid URL).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("HTTP {status}: {method} {path}")]
    Status {
        status: u16,
        method: &'static str,
        path: String,
    },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}
