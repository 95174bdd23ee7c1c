//! Protocol configuration: program ids, well-known accounts, and the record
//! verification policy.
//!
//! Nothing in the core reads a global table. Every derivation and
//! verification takes the relevant piece of a [`ProtocolConfig`], which
//! defaults to the mainnet deployment.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::constants::{
    ASSOCIATED_TOKEN_PROGRAM_ID, DEVNET_NAME_OFFERS_ID, DEVNET_REVERSE_LOOKUP_CLASS,
    DEVNET_ROOT_DOMAIN, GUARDIAN, NAME_OFFERS_ID, NAME_PROGRAM_ID, NAME_TOKENIZER_ID,
    RECORD_V2_CLASS, REVERSE_LOOKUP_CLASS, ROOT_DOMAIN, TOKEN_PROGRAM_ID,
};
use crate::record::ValidationLengths;
use crate::record_type::Record;
use crate::types::Address;

/// Program ids and well-known accounts of one deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramAddresses {
    pub name_program: Address,
    pub root_domain: Address,
    pub reverse_lookup_class: Address,
    pub record_v2_class: Address,
    pub name_tokenizer: Address,
    pub name_offers: Address,
    pub token_program: Address,
    pub associated_token_program: Address,
}

impl ProgramAddresses {
    pub const MAINNET: Self = Self {
        name_program: NAME_PROGRAM_ID,
        root_domain: ROOT_DOMAIN,
        reverse_lookup_class: REVERSE_LOOKUP_CLASS,
        record_v2_class: RECORD_V2_CLASS,
        name_tokenizer: NAME_TOKENIZER_ID,
        name_offers: NAME_OFFERS_ID,
        token_program: TOKEN_PROGRAM_ID,
        associated_token_program: ASSOCIATED_TOKEN_PROGRAM_ID,
    };

    pub const DEVNET: Self = Self {
        root_domain: DEVNET_ROOT_DOMAIN,
        reverse_lookup_class: DEVNET_REVERSE_LOOKUP_CLASS,
        name_offers: DEVNET_NAME_OFFERS_ID,
        ..Self::MAINNET
    };
}

impl Default for ProgramAddresses {
    fn default() -> Self {
        Self::MAINNET
    }
}

/// Which verifier and which validation kind apply to each record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPolicy {
    /// Records signed by a fixed guardian key.
    pub guardians: HashMap<Record, Address>,
    /// Records whose content is the key that signed the association.
    pub self_signed: HashSet<Record>,
    /// Records whose association is proven with an Ethereum signature.
    pub eth_roa: HashSet<Record>,
}

impl RecordPolicy {
    pub fn guardian(&self, record: Record) -> Option<Address> {
        self.guardians.get(&record).copied()
    }

    pub fn is_self_signed(&self, record: Record) -> bool {
        self.self_signed.contains(&record)
    }

    pub fn uses_eth_roa(&self, record: Record) -> bool {
        self.eth_roa.contains(&record)
    }
}

impl Default for RecordPolicy {
    fn default() -> Self {
        Self {
            guardians: HashMap::from([(Record::Cname, GUARDIAN), (Record::Url, GUARDIAN)]),
            self_signed: HashSet::from([
                Record::Base,
                Record::Bsc,
                Record::Eth,
                Record::Injective,
                Record::Sol,
            ]),
            eth_roa: HashSet::from([Record::Base, Record::Bsc, Record::Eth, Record::Injective]),
        }
    }
}

/// Everything the core needs to know about a deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolConfig {
    pub programs: ProgramAddresses,
    pub records: RecordPolicy,
    pub validation_lengths: ValidationLengths,
}

impl ProtocolConfig {
    pub fn mainnet() -> Self {
        Self {
            programs: ProgramAddresses::MAINNET,
            records: RecordPolicy::default(),
            validation_lengths: ValidationLengths::STANDARD,
        }
    }

    pub fn devnet() -> Self {
        Self {
            programs: ProgramAddresses::DEVNET,
            ..Self::mainnet()
        }
    }
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self::mainnet()
    }
}
