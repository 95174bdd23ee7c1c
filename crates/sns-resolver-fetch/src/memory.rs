//! In-memory implementation of the AccountFetcher trait.
//!
//! This is primarily for testing. Accounts live in a map; request counters
//! let tests assert how the resolver batches its reads.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::RwLock;
use sns_resolver_core::Address;

use crate::error::{FetchError, Result};
use crate::traits::{
    AccountFetcher, AccountFilter, AccountInfo, TokenHolding, MAX_MULTIPLE_ACCOUNTS,
};

/// In-memory fetcher.
///
/// Thread-safe via RwLock. Every read sees the accounts present at the time
/// of the call.
pub struct MemoryFetcher {
    inner: RwLock<MemoryFetcherInner>,
    single_calls: AtomicUsize,
    multiple_calls: AtomicUsize,
    largest_batch: AtomicUsize,
}

#[derive(Default)]
struct MemoryFetcherInner {
    /// Accounts indexed by address.
    accounts: HashMap<Address, AccountInfo>,

    /// Token holders per mint, in the order they were set.
    holders: HashMap<Address, Vec<TokenHolding>>,

    /// When set, every request fails with this transport error.
    failure: Option<String>,
}

impl MemoryFetcher {
    /// Create a new empty fetcher.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryFetcherInner::default()),
            single_calls: AtomicUsize::new(0),
            multiple_calls: AtomicUsize::new(0),
            largest_batch: AtomicUsize::new(0),
        }
    }

    /// Insert or replace an account.
    pub fn insert(&self, address: Address, program_id: Address, data: impl Into<Bytes>) {
        let info = AccountInfo {
            address,
            data: data.into(),
            program_id,
        };
        self.inner.write().accounts.insert(address, info);
    }

    /// Remove an account, returning it if it existed.
    pub fn remove(&self, address: &Address) -> Option<AccountInfo> {
        self.inner.write().accounts.remove(address)
    }

    /// Set the token holders reported for `mint`.
    pub fn set_holders(&self, mint: Address, holders: Vec<TokenHolding>) {
        self.inner.write().holders.insert(mint, holders);
    }

    /// Make every subsequent request fail, or clear the failure with `None`.
    pub fn set_failure(&self, failure: Option<&str>) {
        self.inner.write().failure = failure.map(str::to_string);
    }

    /// Number of accounts held.
    pub fn len(&self) -> usize {
        self.inner.read().accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of single-account requests served.
    pub fn single_calls(&self) -> usize {
        self.single_calls.load(Ordering::SeqCst)
    }

    /// Number of multi-account requests served.
    pub fn multiple_calls(&self) -> usize {
        self.multiple_calls.load(Ordering::SeqCst)
    }

    /// Largest address count seen in one multi-account request.
    pub fn largest_batch(&self) -> usize {
        self.largest_batch.load(Ordering::SeqCst)
    }

    fn check_failure(&self) -> Result<()> {
        match &self.inner.read().failure {
            Some(message) => Err(FetchError::Transport(message.clone())),
            None => Ok(()),
        }
    }
}

impl Default for MemoryFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountFetcher for MemoryFetcher {
    async fn get_account(&self, address: &Address) -> Result<Option<AccountInfo>> {
        self.check_failure()?;
        self.single_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.inner.read().accounts.get(address).cloned())
    }

    async fn get_multiple_accounts(
        &self,
        addresses: &[Address],
    ) -> Result<Vec<Option<AccountInfo>>> {
        self.check_failure()?;
        if addresses.len() > MAX_MULTIPLE_ACCOUNTS {
            return Err(FetchError::InvalidResponse(format!(
                "{} addresses exceeds the limit of {MAX_MULTIPLE_ACCOUNTS}",
                addresses.len()
            )));
        }
        self.multiple_calls.fetch_add(1, Ordering::SeqCst);
        self.largest_batch.fetch_max(addresses.len(), Ordering::SeqCst);

        let inner = self.inner.read();
        Ok(addresses
            .iter()
            .map(|address| inner.accounts.get(address).cloned())
            .collect())
    }

    async fn get_program_accounts(
        &self,
        program_id: &Address,
        filters: &[AccountFilter],
    ) -> Result<Vec<AccountInfo>> {
        self.check_failure()?;
        let inner = self.inner.read();
        let mut matches: Vec<AccountInfo> = inner
            .accounts
            .values()
            .filter(|info| info.program_id == *program_id)
            .filter(|info| filters.iter().all(|f| f.matches(&info.data)))
            .cloned()
            .collect();
        matches.sort_by_key(|info| info.address);
        Ok(matches)
    }

    async fn get_token_largest_accounts(&self, mint: &Address) -> Result<Vec<TokenHolding>> {
        self.check_failure()?;
        let mut holders = self.inner.read().holders.get(mint).cloned().unwrap_or_default();
        holders.sort_by(|a, b| b.amount.cmp(&a.amount));
        Ok(holders)
    }
}
