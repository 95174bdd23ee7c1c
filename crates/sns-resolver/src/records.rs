//! Version 2 record retrieval and verification.

use serde::{Deserialize, Serialize};
use sns_resolver_core::{Address, Record, RecordAccount, RecordVerifier};
use sns_resolver_fetch::AccountFetcher;
use tracing::debug;

use crate::error::{ResolveError, Result};
use crate::resolver::Resolver;

/// Outcome of checking a record against its domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordVerification {
    /// Written by the current domain owner.
    pub staleness: bool,
    /// RoA check result; `None` when no verifier applies.
    pub roa: Option<bool>,
}

/// A retrieved record with its verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainRecord {
    pub record: Record,
    pub account: RecordAccount,
    pub verification: RecordVerification,
}

impl<F: AccountFetcher> Resolver<F> {
    /// Retrieve and verify one record of `domain`.
    ///
    /// The record account must exist. Without a `verifier`, the default
    /// verifier of the record type is used, if it has one.
    pub async fn domain_record(
        &self,
        domain: &str,
        record: Record,
        verifier: Option<&[u8]>,
    ) -> Result<DomainRecord> {
        let address = self.deriver().record_v2_address(domain, record)?;
        let (owner, account) = futures::join!(self.domain_owner(domain), self.record(&address));
        let (owner, account) = (owner?, account?);
        self.verify(owner, record, account, verifier)
    }

    /// Retrieve and verify several records of `domain` in one batch.
    ///
    /// One slot per record, `None` where the record account does not exist
    /// or cannot be decoded and verified.
    /// When given, `verifiers` pairs one optional verifier with each record.
    pub async fn domain_records(
        &self,
        domain: &str,
        records: &[Record],
        verifiers: Option<&[Option<&[u8]>]>,
    ) -> Result<Vec<Option<DomainRecord>>> {
        if let Some(verifiers) = verifiers {
            if verifiers.len() != records.len() {
                return Err(ResolveError::MissingVerifier(format!(
                    "{} verifiers for {} records",
                    verifiers.len(),
                    records.len()
                )));
            }
        }

        let addresses = records
            .iter()
            .map(|record| self.deriver().record_v2_address(domain, *record))
            .collect::<sns_resolver_core::Result<Vec<Address>>>()?;
        let (owner, accounts) =
            futures::join!(self.domain_owner(domain), self.fetch_many(&addresses));
        let (owner, accounts) = (owner?, accounts?);

        let lengths = &self.config().protocol.validation_lengths;
        Ok(records
            .iter()
            .zip(accounts)
            .enumerate()
            .map(|(i, (record, account))| {
                let account = account?;
                let verifier = verifiers.and_then(|v| v[i]);
                let checked = RecordAccount::decode_with(&account.data, lengths)
                    .map_err(ResolveError::from)
                    .and_then(|decoded| self.verify(owner, *record, decoded, verifier));
                match checked {
                    Ok(checked) => Some(checked),
                    Err(e) => {
                        debug!(domain, %record, error = %e, "skipping unreadable record");
                        None
                    }
                }
            })
            .collect())
    }

    /// Whether the record of `domain` was written by its current owner.
    pub async fn verify_record_staleness(&self, domain: &str, record: Record) -> Result<bool> {
        Ok(self.domain_record(domain, record, None).await?.verification.staleness)
    }

    /// Whether the record of `domain` carries a valid right of association.
    ///
    /// Fails with [`ResolveError::MissingVerifier`] when no verifier is
    /// given and the record type has no default.
    pub async fn verify_record_roa(
        &self,
        domain: &str,
        record: Record,
        verifier: Option<&[u8]>,
    ) -> Result<bool> {
        self.domain_record(domain, record, verifier)
            .await?
            .verification
            .roa
            .ok_or_else(|| {
                ResolveError::MissingVerifier(format!("no default verifier for {record}"))
            })
    }

    async fn record(&self, address: &Address) -> Result<RecordAccount> {
        let account = self
            .fetcher()
            .get_account(address)
            .await?
            .ok_or(ResolveError::AccountDoesNotExist(*address))?;
        Ok(RecordAccount::decode_with(
            &account.data,
            &self.config().protocol.validation_lengths,
        )?)
    }

    fn verify(
        &self,
        owner: Address,
        record: Record,
        account: RecordAccount,
        verifier: Option<&[u8]>,
    ) -> Result<DomainRecord> {
        let checker = RecordVerifier::from_config(&self.config().protocol);
        let staleness = checker.verify_staleness(&owner, &account)?;

        let verifier = match verifier {
            Some(v) => Some(v.to_vec()),
            None => checker.default_verifier(record, &account)?,
        };
        let roa = verifier
            .map(|v| checker.verify_roa(record, &account, &v))
            .transpose()?;

        Ok(DomainRecord {
            record,
            account,
            verification: RecordVerification { staleness, roa },
        })
    }
}
