//! Error types for the SNS resolver core.

use thiserror::Error;

/// Errors raised by the pure primitives: derivation, decoding, verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A name or argument does not have an acceptable shape.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A domain string could not be mapped onto a registry key.
    #[error("invalid domain: {0}")]
    InvalidDomain(String),

    /// A base58 string did not decode to a 32-byte address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Account bytes do not match the expected layout.
    #[error("invalid serialized data: {0}")]
    InvalidSerializedData(String),

    /// Record header or body is inconsistent with its validation kinds.
    #[error("record malformed: {0}")]
    RecordMalformed(String),

    /// No verifier was supplied and the record type has no default one.
    #[error("missing verifier: {0}")]
    MissingVerifier(String),

    /// Every bump seed produced an on-curve point.
    #[error("unable to find a viable program address bump seed")]
    NoViableBump,
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
