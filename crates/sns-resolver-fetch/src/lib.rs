//! # SNS Resolver Fetch
//!
//! Account fetch abstraction for the SNS resolver. The resolver never talks
//! to an RPC node directly; it asks an [`AccountFetcher`] for raw account
//! bytes and owning program ids.
//!
//! ## Key Types
//!
//! - [`AccountFetcher`] - The async trait for all account reads
//! - [`FetcherExt`] - Chunked multi-account reads on top of any fetcher
//! - [`MemoryFetcher`] - In-memory accounts for tests
//! - [`AccountInfo`] - Raw bytes plus owning program of one account
//! - [`AccountFilter`] - Filters for program account scans
//!
//! ## Design Notes
//!
//! - **Absence is not an error**: a missing account is `Ok(None)`
//! - **Order preserving**: multi reads return one slot per requested address
//! - **No retries**: retry and timeout policy belong to the implementation

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{FetchError, Result};
pub use memory::MemoryFetcher;
pub use traits::{
    AccountFetcher, AccountFilter, AccountInfo, FetcherExt, TokenHolding, MAX_MULTIPLE_ACCOUNTS,
};
