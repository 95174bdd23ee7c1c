//! Error types for resolution.

use sns_resolver_core::{Address, CoreError};
use sns_resolver_fetch::FetchError;
use thiserror::Error;

/// Errors that can occur while resolving a name.
///
/// Every variant is terminal: resolution either yields one address or one
/// of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The domain's registry account does not exist.
    #[error("domain {0} does not exist")]
    DomainDoesNotExist(String),

    /// A required account does not exist.
    #[error("account {0} does not exist")]
    AccountDoesNotExist(Address),

    /// Record bytes are inconsistent with the record layout.
    #[error("record malformed: {0}")]
    RecordMalformed(String),

    /// A SOL record is not validated by Solana signatures.
    #[error("record validation kinds are not both Solana")]
    InvalidValidation,

    /// A fresh SOL record whose RoA id does not match its content.
    #[error("invalid right of association: expected {expected}, found {found}")]
    InvalidRoA { expected: String, found: String },

    /// The domain is tokenized but no holder owns its NFT.
    #[error("could not find the owner of the domain NFT")]
    CouldNotFindNftOwner,

    /// The registry owner is a program address and is not allowed.
    #[error("program-owned domain owner not allowed: {0}")]
    PdaOwnerNotAllowed(String),

    /// No verifier available for a right-of-association check.
    #[error("missing verifier: {0}")]
    MissingVerifier(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid domain: {0}")]
    InvalidDomain(String),

    /// Account bytes do not decode.
    #[error("invalid serialized data: {0}")]
    InvalidSerializedData(String),

    /// The account fetcher failed.
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),
}

impl From<CoreError> for ResolveError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidInput(msg) | CoreError::InvalidAddress(msg) => {
                ResolveError::InvalidInput(msg)
            }
            CoreError::InvalidDomain(msg) => ResolveError::InvalidDomain(msg),
            CoreError::InvalidSerializedData(msg) => ResolveError::InvalidSerializedData(msg),
            CoreError::RecordMalformed(msg) => ResolveError::RecordMalformed(msg),
            CoreError::MissingVerifier(msg) => ResolveError::MissingVerifier(msg),
            CoreError::NoViableBump => {
                ResolveError::InvalidInput("no viable program address bump".into())
            }
        }
    }
}

/// Result type for resolution.
pub type Result<T> = std::result::Result<T, ResolveError>;
