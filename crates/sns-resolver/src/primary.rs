//! Primary domains: the name a wallet has chosen to be known by.

use serde::{Deserialize, Serialize};
use sns_resolver_core::constants::REGISTRY_HEADER_LEN;
use sns_resolver_core::{
    decode_reverse, Address, PrimaryDomainAccount, RegistryAccount, TokenAccount,
};
use sns_resolver_fetch::AccountFetcher;
use tracing::debug;

use crate::error::{ResolveError, Result};
use crate::resolver::Resolver;

/// The primary domain of a wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryDomain {
    /// Name account of the domain.
    pub domain: Address,
    /// The domain name, `sub.parent` for a subdomain.
    pub reverse: String,
    /// The wallet no longer owns the domain.
    pub stale: bool,
}

/// A primary whose domain registry exists, during a batch lookup.
struct Candidate {
    index: usize,
    domain: Address,
    registry: RegistryAccount,
}

impl<F: AccountFetcher> Resolver<F> {
    /// Primary domain of `wallet`.
    ///
    /// Fails with [`ResolveError::AccountDoesNotExist`] when the wallet has
    /// no primary or its domain is gone. The result is returned even when
    /// stale.
    pub async fn primary_domain(&self, wallet: &Address) -> Result<PrimaryDomain> {
        let primary_address = self.deriver().primary_domain_address(wallet)?;
        let account = self
            .fetcher()
            .get_account(&primary_address)
            .await?
            .ok_or(ResolveError::AccountDoesNotExist(primary_address))?;
        let primary = PrimaryDomainAccount::decode(&account.data)?;
        let domain = primary.name_account;

        let (registry, nft_owner) =
            futures::join!(self.registry(&domain), self.nft_owner(&domain));
        let registry = registry?;
        let owner = nft_owner?.unwrap_or(registry.owner);

        let reverse = if self.is_subdomain(&registry) {
            let parent = registry.parent_name;
            let (sub, parent) = futures::try_join!(
                self.reverse_lookup(&domain, Some(&parent)),
                self.reverse_lookup(&parent, None),
            )?;
            format!("{sub}.{parent}")
        } else {
            self.reverse_lookup(&domain, None).await?
        };

        Ok(PrimaryDomain {
            domain,
            reverse,
            stale: *wallet != owner,
        })
    }

    /// Primary domain names of many wallets.
    ///
    /// One slot per wallet, in input order. A wallet without a primary, or
    /// whose primary is stale, yields `None`.
    pub async fn primary_domains_batch(&self, wallets: &[Address]) -> Result<Vec<Option<String>>> {
        let mut result = vec![None; wallets.len()];

        let primary_addresses = wallets
            .iter()
            .map(|wallet| self.deriver().primary_domain_address(wallet))
            .collect::<sns_resolver_core::Result<Vec<_>>>()?;
        let primaries = self.fetch_many(&primary_addresses).await?;

        let mut pending = Vec::new();
        for (index, account) in primaries.into_iter().enumerate() {
            let Some(account) = account else { continue };
            match PrimaryDomainAccount::decode(&account.data) {
                Ok(primary) => pending.push((index, primary.name_account)),
                Err(e) => debug!(wallet = %wallets[index], error = %e, "undecodable primary"),
            }
        }

        let domains: Vec<Address> = pending.iter().map(|(_, domain)| *domain).collect();
        let registries = self.fetch_many(&domains).await?;
        let candidates: Vec<Candidate> = pending
            .into_iter()
            .zip(registries)
            .filter_map(|((index, domain), account)| {
                let registry = RegistryAccount::decode(&account?.data).ok()?;
                Some(Candidate {
                    index,
                    domain,
                    registry,
                })
            })
            .collect();

        let mut reverse_addresses = Vec::with_capacity(candidates.len());
        let mut parent_reverse_addresses = Vec::with_capacity(candidates.len());
        let mut token_addresses = Vec::with_capacity(candidates.len());
        for candidate in &candidates {
            let parent = candidate.registry.parent_name;
            let is_sub = self.is_subdomain(&candidate.registry);
            let mint = self.deriver().nft_mint_address(&candidate.domain)?;

            reverse_addresses.push(
                self.deriver()
                    .reverse_address(&candidate.domain, is_sub.then_some(&parent))?,
            );
            parent_reverse_addresses.push(if is_sub {
                self.deriver().reverse_address(&parent, None)?
            } else {
                Address::ZERO
            });
            token_addresses.push(
                self.deriver()
                    .associated_token_address(&wallets[candidate.index], &mint)?,
            );
        }

        let (reverses, parent_reverses, tokens) = futures::try_join!(
            self.fetch_many(&reverse_addresses),
            self.fetch_many(&parent_reverse_addresses),
            self.fetch_many(&token_addresses),
        )?;

        let name_program = self.deriver().programs().name_program;
        for (((candidate, reverse), parent_reverse), token) in candidates
            .iter()
            .zip(reverses)
            .zip(parent_reverses)
            .zip(tokens)
        {
            let Some(reverse) = reverse else { continue };

            let parent_name = parent_reverse
                .filter(|account| account.program_id == name_program)
                .and_then(|account| reverse_name(&account.data, false))
                .map(|name| format!(".{name}"))
                .unwrap_or_default();

            let wallet = &wallets[candidate.index];
            let name = if candidate.registry.owner == *wallet {
                reverse_name(&reverse.data, true)
            } else if token
                .and_then(|account| TokenAccount::decode(&account.data).ok())
                .is_some_and(|token| token.amount == 1)
            {
                reverse_name(&reverse.data, false)
            } else {
                debug!(%wallet, domain = %candidate.domain, "primary domain is stale");
                None
            };

            result[candidate.index] = name.map(|name| name + &parent_name);
        }

        Ok(result)
    }

    fn is_subdomain(&self, registry: &RegistryAccount) -> bool {
        registry.parent_name != self.deriver().programs().root_domain
    }
}

/// Name stored in a raw reverse account.
fn reverse_name(data: &[u8], trim_leading_nul: bool) -> Option<String> {
    decode_reverse(data.get(REGISTRY_HEADER_LEN..)?, trim_leading_nul).ok()
}
