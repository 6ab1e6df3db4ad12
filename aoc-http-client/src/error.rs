//! Error types for the AOC HTTP client

use thiserror::Error;

/// Errors that can occur when using the AOC HTTP client
#[derive(Error, Debug)]
pub enum AocError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Invalid HTTP status code received
    #[error("Invalid HTTP status: {status}")]
    InvalidStatus {
        /// The status code that was received
        status: reqwest::StatusCode,
    },

    /// Failed to decode response as UTF-8
    #[error("Failed to decode response as UTF-8")]
    Encoding,

    /// The session cookie cannot be sent as a header value
    #[error("Invalid session cookie")]
    InvalidSession,

    /// Client initialization failed
    #[error("Client initialization failed: {0}")]
    ClientInit(String),
}

impl AocError {
    /// The puzzle does not exist or is not unlocked yet
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AocError::InvalidStatus { status } if *status == reqwest::StatusCode::NOT_FOUND
        )
    }
}
