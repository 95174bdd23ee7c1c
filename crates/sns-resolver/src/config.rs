//! Resolver configuration and per-call options.

use serde::{Deserialize, Serialize};
use sns_resolver_core::{Address, ProtocolConfig};
use sns_resolver_fetch::MAX_MULTIPLE_ACCOUNTS;

/// Configuration for the Resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Program ids, record policy and validation lengths.
    pub protocol: ProtocolConfig,
    /// Addresses per multi-account request in batch operations.
    pub batch_size: usize,
}

impl ResolverConfig {
    pub fn devnet() -> Self {
        Self {
            protocol: ProtocolConfig::devnet(),
            ..Self::default()
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            protocol: ProtocolConfig::mainnet(),
            batch_size: MAX_MULTIPLE_ACCOUNTS,
        }
    }
}

/// Policy for a registry owner that is not on the Ed25519 curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AllowPda {
    /// Program-derived owners are rejected.
    #[default]
    Deny,
    /// Allowed when the owner account belongs to one of `program_ids`.
    Allow,
    /// Always allowed.
    Any,
}

/// Options for a single resolution.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResolveOptions {
    pub allow_pda: AllowPda,
    /// Programs trusted to own a program-derived owner under [`AllowPda::Allow`].
    pub program_ids: Vec<Address>,
}

impl ResolveOptions {
    /// Accept program-derived owners held by any of `program_ids`.
    pub fn allow_programs(program_ids: impl IntoIterator<Item = Address>) -> Self {
        Self {
            allow_pda: AllowPda::Allow,
            program_ids: program_ids.into_iter().collect(),
        }
    }

    /// Accept every program-derived owner.
    pub fn allow_any() -> Self {
        Self {
            allow_pda: AllowPda::Any,
            program_ids: Vec::new(),
        }
    }
}
