//! AccountFetcher trait: the abstract interface for reading chain state.
//!
//! Implementations wrap an RPC client, a cache, or (for tests) a map of
//! accounts held in memory.

use async_trait::async_trait;
use bytes::Bytes;
use sns_resolver_core::Address;

use crate::error::Result;

/// Largest number of addresses a single multi-account read may carry.
pub const MAX_MULTIPLE_ACCOUNTS: usize = 100;

/// One account as returned by the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountInfo {
    /// The account's own address.
    pub address: Address,
    /// Raw account data.
    pub data: Bytes,
    /// The program that owns the account.
    pub program_id: Address,
}

/// A filter applied server side to a program account scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountFilter {
    /// Account data at `offset` must equal `bytes`.
    Memcmp { offset: usize, bytes: Vec<u8> },
    /// Account data must be exactly this many bytes.
    DataSize(usize),
}

impl AccountFilter {
    /// Memcmp filter against an address.
    pub fn memcmp_address(offset: usize, address: &Address) -> Self {
        AccountFilter::Memcmp {
            offset,
            bytes: address.as_bytes().to_vec(),
        }
    }

    /// Whether `data` passes this filter.
    pub fn matches(&self, data: &[u8]) -> bool {
        match self {
            AccountFilter::Memcmp { offset, bytes } => data
                .get(*offset..offset.saturating_add(bytes.len()))
                .is_some_and(|window| window == bytes.as_slice()),
            AccountFilter::DataSize(size) => data.len() == *size,
        }
    }
}

/// A token account holding some amount of a mint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenHolding {
    pub address: Address,
    pub amount: u64,
}

/// The AccountFetcher trait: async interface for account reads.
///
/// # Design Notes
///
/// - **Absence**: a missing account is `Ok(None)`, never an error.
/// - **Ordering**: `get_multiple_accounts` returns exactly one slot per
///   input address, in input order.
/// - **Cancellation**: dropping a returned future cancels the read.
#[async_trait]
pub trait AccountFetcher: Send + Sync {
    // ─────────────────────────────────────────────────────────────────────────
    // Account Reads
    // ─────────────────────────────────────────────────────────────────────────

    /// Fetch a single account.
    async fn get_account(&self, address: &Address) -> Result<Option<AccountInfo>>;

    /// Fetch several accounts in one request.
    ///
    /// Callers keep `addresses` at or below [`MAX_MULTIPLE_ACCOUNTS`]; use
    /// [`FetcherExt::get_accounts_chunked`] for longer lists.
    async fn get_multiple_accounts(&self, addresses: &[Address])
        -> Result<Vec<Option<AccountInfo>>>;

    /// Scan all accounts owned by `program_id` that pass every filter.
    async fn get_program_accounts(
        &self,
        program_id: &Address,
        filters: &[AccountFilter],
    ) -> Result<Vec<AccountInfo>>;

    // ─────────────────────────────────────────────────────────────────────────
    // Token Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Token accounts of `mint`, largest balance first.
    async fn get_token_largest_accounts(&self, mint: &Address) -> Result<Vec<TokenHolding>>;
}

/// Extension trait for common fetch patterns.
pub trait FetcherExt: AccountFetcher {
    /// Fetch any number of accounts, `chunk_size` addresses per request.
    ///
    /// Chunks are requested one after another; the result has one slot per
    /// input address, in input order.
    fn get_accounts_chunked(
        &self,
        addresses: &[Address],
        chunk_size: usize,
    ) -> impl std::future::Future<Output = Result<Vec<Option<AccountInfo>>>> + Send;
}

impl<F: AccountFetcher + ?Sized> FetcherExt for F {
    async fn get_accounts_chunked(
        &self,
        addresses: &[Address],
        chunk_size: usize,
    ) -> Result<Vec<Option<AccountInfo>>> {
        let chunk_size = chunk_size.clamp(1, MAX_MULTIPLE_ACCOUNTS);
        tracing::debug!(addresses = addresses.len(), chunk_size, "chunked account read");
        let mut result = Vec::with_capacity(addresses.len());

        for chunk in addresses.chunks(chunk_size) {
            let accounts = self.get_multiple_accounts(chunk).await?;
            if accounts.len() != chunk.len() {
                return Err(crate::error::FetchError::InvalidResponse(format!(
                    "requested {} accounts, received {}",
                    chunk.len(),
                    accounts.len()
                )));
            }
            result.extend(accounts);
        }

        Ok(result)
    }
}
