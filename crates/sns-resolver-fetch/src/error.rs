//! Error types for the fetch module.

use thiserror::Error;

/// Errors raised by an account fetcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The transport failed to deliver a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response did not have the expected shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;
