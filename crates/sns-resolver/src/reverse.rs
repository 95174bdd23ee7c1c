//! Reverse lookups and program account scans.

use serde::{Deserialize, Serialize};
use sns_resolver_core::constants::REGISTRY_HEADER_LEN;
use sns_resolver_core::{decode_reverse, Address, RegistryAccount};
use sns_resolver_fetch::{AccountFetcher, AccountFilter};
use tracing::debug;

use crate::error::Result;
use crate::resolver::Resolver;

/// A domain found for an owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedDomain {
    /// Domain name without the `.sol` suffix.
    pub domain: String,
    pub domain_address: Address,
}

/// A subdomain of a top-level domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subdomain {
    /// The subdomain label.
    pub subdomain: String,
    pub owner: Address,
}

/// A registered top-level domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredDomain {
    pub domain_address: Address,
    pub owner: Address,
}

/// Offset of the owner field in a registry header.
const OWNER_OFFSET: usize = 32;

/// Offset of the class field in a registry header.
const CLASS_OFFSET: usize = 64;

impl<F: AccountFetcher> Resolver<F> {
    // ─────────────────────────────────────────────────────────────────────────
    // Reverse Lookup
    // ─────────────────────────────────────────────────────────────────────────

    /// Name stored in the reverse account of `domain_address`.
    ///
    /// Pass the parent domain for a subdomain; its leading `\0` is stripped.
    pub async fn reverse_lookup(
        &self,
        domain_address: &Address,
        parent: Option<&Address>,
    ) -> Result<String> {
        let reverse = self.deriver().reverse_address(domain_address, parent)?;
        let registry = self.registry(&reverse).await?;
        Ok(decode_reverse(&registry.data, parent.is_some())?)
    }

    /// Reverse lookup of many top-level domain addresses.
    ///
    /// One slot per input, in input order. Missing or undecodable reverse
    /// accounts yield `None`.
    pub async fn reverse_lookup_batch(
        &self,
        domain_addresses: &[Address],
    ) -> Result<Vec<Option<String>>> {
        let reverses = domain_addresses
            .iter()
            .map(|address| self.deriver().reverse_address(address, None))
            .collect::<sns_resolver_core::Result<Vec<_>>>()?;

        let accounts = self.fetch_many(&reverses).await?;
        Ok(accounts
            .into_iter()
            .map(|account| {
                let account = account?;
                let registry = RegistryAccount::decode(&account.data).ok()?;
                decode_reverse(&registry.data, false).ok()
            })
            .collect())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Scans
    // ─────────────────────────────────────────────────────────────────────────

    /// Top-level domains whose registry owner is `owner`.
    ///
    /// Tokenized domains are owned by the tokenizer and do not appear.
    pub async fn domains_for_address(&self, owner: &Address) -> Result<Vec<OwnedDomain>> {
        let programs = *self.deriver().programs();
        let filters = [
            AccountFilter::memcmp_address(OWNER_OFFSET, owner),
            AccountFilter::memcmp_address(0, &programs.root_domain),
        ];
        let accounts = self
            .fetcher()
            .get_program_accounts(&programs.name_program, &filters)
            .await?;

        let addresses: Vec<Address> = accounts.iter().map(|account| account.address).collect();
        let names = self.reverse_lookup_batch(&addresses).await?;
        debug!(%owner, found = addresses.len(), "scanned domains for owner");

        Ok(names
            .into_iter()
            .zip(addresses)
            .filter_map(|(name, domain_address)| {
                name.map(|domain| OwnedDomain {
                    domain,
                    domain_address,
                })
            })
            .collect())
    }

    /// Subdomains of a top-level domain that have a reverse account.
    ///
    /// A subdomain argument yields an empty list.
    pub async fn subdomains(&self, domain: &str) -> Result<Vec<Subdomain>> {
        let key = self.deriver().domain_key(domain)?;
        if key.is_sub {
            return Ok(Vec::new());
        }
        let programs = *self.deriver().programs();
        let parent = AccountFilter::memcmp_address(0, &key.address);
        let reverse_filters = [
            parent.clone(),
            AccountFilter::memcmp_address(CLASS_OFFSET, &programs.reverse_lookup_class),
        ];
        let sub_filters = [parent];

        let (reverses, subs) = futures::try_join!(
            self.fetcher()
                .get_program_accounts(&programs.name_program, &reverse_filters),
            self.fetcher()
                .get_program_accounts(&programs.name_program, &sub_filters),
        )?;

        let mut result = Vec::new();
        for sub in subs {
            let reverse_key = self.deriver().reverse_address(&sub.address, Some(&key.address))?;
            let Some(reverse) = reverses.iter().find(|r| r.address == reverse_key) else {
                continue;
            };
            let Some(name) = reverse
                .data
                .get(REGISTRY_HEADER_LEN..)
                .and_then(|payload| decode_reverse(payload, true).ok())
                .filter(|name| !name.is_empty())
            else {
                continue;
            };
            let Some(owner) = Address::read(&sub.data, OWNER_OFFSET) else {
                continue;
            };
            result.push(Subdomain {
                subdomain: name,
                owner,
            });
        }
        Ok(result)
    }

    /// Every registered top-level domain and its registry owner.
    pub async fn all_domains(&self) -> Result<Vec<RegisteredDomain>> {
        let programs = *self.deriver().programs();
        let accounts = self
            .fetcher()
            .get_program_accounts(
                &programs.name_program,
                &[AccountFilter::memcmp_address(0, &programs.root_domain)],
            )
            .await?;

        Ok(accounts
            .into_iter()
            .filter_map(|account| {
                Address::read(&account.data, OWNER_OFFSET).map(|owner| RegisteredDomain {
                    domain_address: account.address,
                    owner,
                })
            })
            .collect())
    }
}
