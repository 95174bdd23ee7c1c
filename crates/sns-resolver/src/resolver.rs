//! The Resolver: domain resolution over an account fetcher.
//!
//! The Resolver owns the fetcher and the deployment configuration. Every
//! operation derives the addresses it needs, reads them, and hands the
//! decoded accounts to the pure functions of [`crate::steps`] and
//! `sns_resolver_core`.

use std::sync::Arc;

use futures::future::join_all;
use sns_resolver_core::{
    Address, AddressDeriver, NftAccount, Record, RecordAccount, RegistryAccount, TokenAccount,
};
use sns_resolver_fetch::{AccountFetcher, AccountInfo, FetchError, FetcherExt};
use tracing::{debug, warn};

use crate::config::{ResolveOptions, ResolverConfig};
use crate::error::{ResolveError, Result};
use crate::steps::{self, Step};

/// Resolves SNS names against chain state read through `F`.
pub struct Resolver<F: AccountFetcher> {
    fetcher: Arc<F>,
    config: ResolverConfig,
    deriver: AddressDeriver,
}

impl<F: AccountFetcher> Clone for Resolver<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            config: self.config.clone(),
            deriver: self.deriver,
        }
    }
}

impl<F: AccountFetcher> Resolver<F> {
    /// Create a resolver for mainnet.
    pub fn new(fetcher: F) -> Self {
        Self::with_config(fetcher, ResolverConfig::default())
    }

    /// Create a resolver with an explicit configuration.
    pub fn with_config(fetcher: F, config: ResolverConfig) -> Self {
        Self::from_shared(Arc::new(fetcher), config)
    }

    /// Create a resolver over a fetcher shared with other components.
    pub fn from_shared(fetcher: Arc<F>, config: ResolverConfig) -> Self {
        let deriver = AddressDeriver::new(config.protocol.programs);
        Self {
            fetcher,
            config,
            deriver,
        }
    }

    /// Get the fetcher reference.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// The address deriver for this deployment.
    pub fn deriver(&self) -> &AddressDeriver {
        &self.deriver
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Resolution
    // ─────────────────────────────────────────────────────────────────────────

    /// Resolve a domain to the address it points to.
    ///
    /// The domain, NFT, and both SOL record accounts are read in one
    /// multi-account request. Branches are tried in order: NFT holder,
    /// SOL record v2, SOL record v1, registry owner.
    pub async fn resolve_domain(&self, domain: &str, options: &ResolveOptions) -> Result<Address> {
        let key = self.deriver.domain_key(domain)?;
        let nft_address = self.deriver.nft_record_address(&key.address)?;
        let v1_address = self.deriver.record_v1_address(domain, Record::Sol)?;
        let v2_address = self.deriver.record_v2_address(domain, Record::Sol)?;

        let [domain_account, nft_account, v1_account, v2_account] = self
            .fetch_exact([key.address, nft_address, v1_address, v2_address])
            .await?;

        let Some(domain_account) = domain_account else {
            debug!(domain, "domain does not exist");
            return Err(ResolveError::DomainDoesNotExist(domain.to_string()));
        };
        let registry = RegistryAccount::decode(&domain_account.data)?;

        let nft = nft_account
            .map(|account| NftAccount::decode(&account.data))
            .transpose()?;
        if steps::is_tokenized(nft.as_ref()) {
            let holder = self.nft_owner(&key.address).await?;
            debug!(domain, ?holder, "domain is tokenized");
            return steps::nft_owner_step(holder);
        }

        if let Some(account) = v2_account {
            let lengths = &self.config.protocol.validation_lengths;
            let step = match RecordAccount::decode_with(&account.data, lengths) {
                Ok(record) => steps::record_v2_step(&record, &registry.owner, lengths),
                Err(e) => Step::Failed(e.into()),
            };
            if let Some(result) = step.into_terminal() {
                debug!(domain, ?result, "resolved by SOL record v2");
                return result;
            }
            debug!(domain, "SOL record v2 is stale");
        }

        if let Some(account) = v1_account {
            let step = steps::record_v1_step(&account.data, &v1_address, &registry.owner);
            if let Some(result) = step.into_terminal() {
                debug!(domain, ?result, "resolved by SOL record v1");
                return result;
            }
            debug!(domain, "SOL record v1 signature does not verify");
        }

        let owner_account = if steps::needs_owner_account(&registry.owner, options) {
            self.fetcher.get_account(&registry.owner).await?
        } else {
            None
        };
        let result = steps::default_owner_step(&registry.owner, options, owner_account.as_ref());
        debug!(domain, ?result, "resolved by registry owner");
        result
    }

    /// Resolve several domains concurrently.
    ///
    /// One slot per input, in input order. A domain that fails to resolve
    /// yields `None`.
    pub async fn resolve_batch(
        &self,
        domains: &[&str],
        options: &ResolveOptions,
    ) -> Vec<Option<Address>> {
        let lookups = domains
            .iter()
            .map(|domain| self.resolve_domain(domain, options));

        join_all(lookups)
            .await
            .into_iter()
            .zip(domains)
            .map(|(result, domain)| match result {
                Ok(address) => Some(address),
                Err(e) => {
                    warn!(domain, error = %e, "resolution failed");
                    None
                }
            })
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Ownership
    // ─────────────────────────────────────────────────────────────────────────

    /// The owner of a domain: the NFT holder if tokenized, the registry
    /// owner otherwise.
    pub async fn domain_owner(&self, domain: &str) -> Result<Address> {
        let key = self.deriver.domain_key(domain)?;
        self.owner_of(&key.address).await
    }

    /// Current holder of the NFT minted for `domain_address`.
    ///
    /// `None` when the mint has no holder or the largest holding is not
    /// exactly one token.
    pub async fn nft_owner(&self, domain_address: &Address) -> Result<Option<Address>> {
        let mint = self.deriver.nft_mint_address(domain_address)?;
        let holders = self.fetcher.get_token_largest_accounts(&mint).await?;
        let Some(largest) = holders.first() else {
            return Ok(None);
        };

        let Some(account) = self.fetcher.get_account(&largest.address).await? else {
            return Ok(None);
        };
        let token = TokenAccount::decode(&account.data)?;
        Ok((token.amount == 1).then_some(token.owner))
    }

    /// Read and decode a registry account.
    pub async fn registry(&self, address: &Address) -> Result<RegistryAccount> {
        let account = self
            .fetcher
            .get_account(address)
            .await?
            .ok_or(ResolveError::AccountDoesNotExist(*address))?;
        Ok(RegistryAccount::decode(&account.data)?)
    }

    pub(crate) async fn owner_of(&self, domain_address: &Address) -> Result<Address> {
        let (registry, nft_owner) =
            futures::join!(self.registry(domain_address), self.nft_owner(domain_address));
        let registry = registry?;
        Ok(nft_owner?.unwrap_or(registry.owner))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal
    // ─────────────────────────────────────────────────────────────────────────

    /// Read a fixed set of accounts in one request.
    pub(crate) async fn fetch_exact<const N: usize>(
        &self,
        addresses: [Address; N],
    ) -> Result<[Option<AccountInfo>; N]> {
        let accounts = self.fetcher.get_multiple_accounts(&addresses).await?;
        accounts.try_into().map_err(|accounts: Vec<_>| {
            ResolveError::Fetch(FetchError::InvalidResponse(format!(
                "requested {N} accounts, received {}",
                accounts.len()
            )))
        })
    }

    /// Read any number of accounts in chunks of the configured batch size.
    pub(crate) async fn fetch_many(&self, addresses: &[Address]) -> Result<Vec<Option<AccountInfo>>> {
        Ok(self
            .fetcher
            .get_accounts_chunked(addresses, self.config.batch_size)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sns_resolver_core::constants::ROOT_DOMAIN;
    use sns_resolver_core::nft::TOKEN_ACCOUNT_LEN;
    use sns_resolver_fetch::{MemoryFetcher, TokenHolding};

    fn addr(byte: u8) -> Address {
        Address::from_bytes([byte; 32])
    }

    fn resolver() -> Resolver<MemoryFetcher> {
        Resolver::new(MemoryFetcher::new())
    }

    #[tokio::test]
    async fn test_missing_domain() {
        let resolver = resolver();
        let result = resolver
            .resolve_domain("bonfida", &ResolveOptions::default())
            .await;
        assert_eq!(
            result,
            Err(ResolveError::DomainDoesNotExist("bonfida".into()))
        );
        assert_eq!(resolver.fetcher().multiple_calls(), 1);
        assert_eq!(resolver.fetcher().single_calls(), 0);
    }

    #[tokio::test]
    async fn test_invalid_domain_makes_no_requests() {
        let resolver = resolver();
        let result = resolver
            .resolve_domain("a.b.c", &ResolveOptions::default())
            .await;
        assert!(matches!(result, Err(ResolveError::InvalidDomain(_))));
        assert_eq!(resolver.fetcher().multiple_calls(), 0);
    }

    #[tokio::test]
    async fn test_registry_missing_account() {
        let resolver = resolver();
        assert_eq!(
            resolver.registry(&addr(1)).await,
            Err(ResolveError::AccountDoesNotExist(addr(1)))
        );
    }

    #[tokio::test]
    async fn test_nft_owner_requires_single_token() {
        let resolver = resolver();
        let programs = *resolver.deriver().programs();
        let domain = addr(5);
        let mint = resolver.deriver().nft_mint_address(&domain).unwrap();

        assert_eq!(resolver.nft_owner(&domain).await, Ok(None));

        let token = TokenAccount {
            mint,
            owner: addr(6),
            amount: 2,
        };
        resolver
            .fetcher()
            .insert(addr(7), programs.token_program, token.encode());
        resolver.fetcher().set_holders(
            mint,
            vec![TokenHolding {
                address: addr(7),
                amount: 2,
            }],
        );
        assert_eq!(resolver.nft_owner(&domain).await, Ok(None));

        let token = TokenAccount { amount: 1, ..token };
        assert_eq!(token.encode().len(), TOKEN_ACCOUNT_LEN);
        resolver
            .fetcher()
            .insert(addr(7), programs.token_program, token.encode());
        assert_eq!(resolver.nft_owner(&domain).await, Ok(Some(addr(6))));
    }

    #[tokio::test]
    async fn test_domain_owner_falls_back_to_registry() {
        let resolver = resolver();
        let programs = *resolver.deriver().programs();
        let key = resolver.deriver().domain_key("bonfida").unwrap();
        let registry = RegistryAccount::new(ROOT_DOMAIN, addr(3), Address::ZERO, Vec::new());
        resolver
            .fetcher()
            .insert(key.address, programs.name_program, registry.encode());

        assert_eq!(resolver.domain_owner("bonfida").await, Ok(addr(3)));
    }

    #[tokio::test]
    async fn test_fetch_errors_propagate() {
        let resolver = resolver();
        resolver.fetcher().set_failure(Some("timeout"));
        let result = resolver
            .resolve_domain("bonfida", &ResolveOptions::default())
            .await;
        assert_eq!(
            result,
            Err(ResolveError::Fetch(FetchError::Transport("timeout".into())))
        );
    }

    #[tokio::test]
    async fn test_resolve_batch_preserves_slots() {
        let resolver = resolver();
        let results = resolver
            .resolve_batch(&["bonfida", "a.b.c"], &ResolveOptions::default())
            .await;
        assert_eq!(results, vec![None, None]);
    }
}
