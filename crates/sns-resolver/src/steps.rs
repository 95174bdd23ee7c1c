//! The branches of domain resolution as pure functions.
//!
//! Resolution tries, in order: the NFT holder of a tokenized domain, the
//! version 2 SOL record, the version 1 SOL record, and finally the registry
//! owner. Each branch here takes already fetched and decoded inputs. The
//! record branches return a [`Step`]; the NFT and owner branches cannot fall
//! through and return a `Result`. The [`Resolver`](crate::Resolver) performs
//! the reads and stops at the first terminal step.

use sns_resolver_core::constants::REGISTRY_HEADER_LEN;
use sns_resolver_core::{
    is_on_curve, verify_signature, Address, NftAccount, RecordAccount, Validation,
    ValidationLengths,
};
use sns_resolver_fetch::AccountInfo;

use crate::config::{AllowPda, ResolveOptions};
use crate::error::ResolveError;

/// Outcome of one resolution branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Terminal: the name resolves to this address.
    Resolved(Address),
    /// The branch does not apply; try the next one.
    Fallthrough,
    /// Terminal: resolution fails.
    Failed(ResolveError),
}

impl Step {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Step::Fallthrough)
    }

    /// The result of a terminal step, `None` for a fallthrough.
    pub fn into_terminal(self) -> Option<Result<Address, ResolveError>> {
        match self {
            Step::Resolved(address) => Some(Ok(address)),
            Step::Failed(e) => Some(Err(e)),
            Step::Fallthrough => None,
        }
    }
}

/// Whether the NFT branch applies: the domain has an active NFT record.
pub fn is_tokenized(nft: Option<&NftAccount>) -> bool {
    nft.is_some_and(NftAccount::is_active)
}

/// NFT branch, once the holder of the domain's mint has been looked up.
///
/// A tokenized domain without a holder is a hard failure, never a
/// fallthrough to the registry owner.
pub fn nft_owner_step(holder: Option<Address>) -> Result<Address, ResolveError> {
    holder.ok_or(ResolveError::CouldNotFindNftOwner)
}

/// Version 2 SOL record branch.
///
/// A stale record (staleness id differs from the registry owner) falls
/// through. A fresh record whose RoA id differs from its content fails.
pub fn record_v2_step(
    record: &RecordAccount,
    registry_owner: &Address,
    lengths: &ValidationLengths,
) -> Step {
    let slices = match record.slices(lengths) {
        Ok(slices) => slices,
        Err(e) => return Step::Failed(e.into()),
    };
    let Ok(content) = Address::try_from(slices.content) else {
        return Step::Failed(ResolveError::RecordMalformed(format!(
            "SOL record content is {} bytes, expected 32",
            slices.content.len()
        )));
    };

    if record.header.staleness_validation != Validation::Solana
        || record.header.roa_validation != Validation::Solana
    {
        return Step::Failed(ResolveError::InvalidValidation);
    }

    if slices.staleness_id != registry_owner.as_bytes() {
        return Step::Fallthrough;
    }

    if slices.roa_id == content.as_bytes() {
        return Step::Resolved(content);
    }

    Step::Failed(ResolveError::InvalidRoA {
        expected: content.to_string(),
        found: Address::try_from(slices.roa_id)
            .map(|roa| roa.to_string())
            .unwrap_or_else(|_| hex::encode(slices.roa_id)),
    })
}

/// Message signed by the domain owner in a version 1 SOL record.
///
/// The ASCII hex of the stored address followed by the record's own address.
pub fn record_v1_message(stored: &Address, record_address: &Address) -> Vec<u8> {
    let mut payload = Vec::with_capacity(64);
    payload.extend_from_slice(stored.as_bytes());
    payload.extend_from_slice(record_address.as_bytes());
    hex::encode(payload).into_bytes()
}

/// Version 1 SOL record branch.
///
/// `data` is the full record account. The 32-byte stored address and its
/// 64-byte signature follow the registry header. Anything that does not
/// verify against the registry owner falls through.
pub fn record_v1_step(data: &[u8], record_address: &Address, registry_owner: &Address) -> Step {
    let Some(stored) = Address::read(data, REGISTRY_HEADER_LEN) else {
        return Step::Fallthrough;
    };
    let Some(signature) = data.get(REGISTRY_HEADER_LEN + 32..REGISTRY_HEADER_LEN + 96) else {
        return Step::Fallthrough;
    };

    let message = record_v1_message(&stored, record_address);
    if verify_signature(registry_owner, &message, signature) {
        Step::Resolved(stored)
    } else {
        Step::Fallthrough
    }
}

/// Whether the default branch needs the registry owner's account.
pub fn needs_owner_account(registry_owner: &Address, options: &ResolveOptions) -> bool {
    options.allow_pda == AllowPda::Allow && !is_on_curve(registry_owner)
}

/// Default branch: the registry owner, subject to the PDA policy.
///
/// `owner_account` is only consulted under [`AllowPda::Allow`], where it is
/// the fetched account at `registry_owner`.
pub fn default_owner_step(
    registry_owner: &Address,
    options: &ResolveOptions,
    owner_account: Option<&AccountInfo>,
) -> Result<Address, ResolveError> {
    if is_on_curve(registry_owner) {
        return Ok(*registry_owner);
    }

    match options.allow_pda {
        AllowPda::Any => Ok(*registry_owner),
        AllowPda::Allow => match owner_account {
            None => Err(ResolveError::PdaOwnerNotAllowed(format!(
                "owner account {registry_owner} does not exist"
            ))),
            Some(account) if options.program_ids.contains(&account.program_id) => {
                Ok(*registry_owner)
            }
            Some(account) => Err(ResolveError::PdaOwnerNotAllowed(format!(
                "program {} is not allowed",
                account.program_id
            ))),
        },
        AllowPda::Deny => Err(ResolveError::PdaOwnerNotAllowed(format!(
            "owner {registry_owner} is off curve"
        ))),
    }
}
