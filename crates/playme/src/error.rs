//! Error types for the playMe client
//!
//! Failures come in two tiers. [`ResponseError`] means the API accepted the
//! call and reported a failure status inside the envelope; everything else
//! in [`Error`] covers the path to and from the API: connection problems,
//! timeouts, bodies that are not envelopes, and configuration mistakes.

use std::time::Duration;

use thiserror::Error;

pub use playme_protocol::{ProtocolError, ResponseError, ResponseStatus};

/// Result type alias for operations that can fail with a playMe client error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the playMe client.
#[derive(Debug, Error)]
pub enum Error {
    /// The API reported a failure status inside the response envelope.
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// The body could not be read as a response envelope.
    #[error("Invalid response payload: {0}")]
    Envelope(#[from] ProtocolError),

    /// HTTP error status whose body was not an envelope.
    #[error("HTTP error (status {status}): {body}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Response body, truncated when long
        body: String,
    },

    /// Network or connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Request timeout.
    #[error("Request timeout after {0:?}")]
    Timeout(Duration),

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP client configuration or initialization error.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// Missing required configuration.
    #[error("Missing required configuration: {0}")]
    MissingConfig(String),
}

impl Error {
    /// Check if this error is retryable.
    ///
    /// Only transport-level failures qualify. Statuses the API reports
    /// inside an envelope are final answers and never retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Connection(_) => true,
            Error::Timeout(_) => true,
            Error::HttpStatus { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// The API-reported status, when the API answered with one.
    pub fn response_status(&self) -> Option<ResponseStatus> {
        match self {
            Error::Response(err) => Some(err.status),
            _ => None,
        }
    }
}
