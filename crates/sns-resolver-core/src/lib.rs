//! # SNS Resolver Core
//!
//! Pure primitives for resolving names on the Solana Name Service: address
//! derivation, account codecs, curve membership, and record verification.
//!
//! This crate contains no I/O. Every function is a pure computation over
//! names, addresses, and raw account bytes.
//!
//! ## Key Types
//!
//! - [`Address`] - A 32-byte account key, rendered as base58
//! - [`AddressDeriver`] - Maps names and records to their account addresses
//! - [`RegistryAccount`] - The 96-byte name registry header plus trailing data
//! - [`RecordAccount`] - A version 2 record with validation-driven slicing
//! - [`NftAccount`] / [`PrimaryDomainAccount`] / [`TokenAccount`] - Tokenization and primary name state
//! - [`RecordVerifier`] - Staleness and right-of-association checks
//! - [`ProtocolConfig`] - Program ids and verification policy of a deployment
//!
//! ## Curve Checks
//!
//! [`is_on_curve`] is the only signal used to tell a wallet key from a
//! program-derived address. See the [`crypto`] module.

pub mod config;
pub mod constants;
pub mod crypto;
pub mod derivation;
pub mod error;
pub mod nft;
pub mod primary;
pub mod record;
pub mod record_type;
pub mod registry;
pub mod types;
pub mod validation;

pub use config::{ProgramAddresses, ProtocolConfig, RecordPolicy};
pub use crypto::{find_program_address, is_on_curve, verify_signature, HashedName};
pub use derivation::{trim_tld, AddressDeriver, DomainKey};
pub use error::{CoreError, Result};
pub use nft::{NftAccount, NftTag, TokenAccount};
pub use primary::PrimaryDomainAccount;
pub use record::{RecordAccount, RecordHeader, RecordSlices, Validation, ValidationLengths};
pub use record_type::{Record, RecordVersion};
pub use registry::{decode_reverse, encode_reverse, RegistryAccount};
pub use types::Address;
pub use validation::RecordVerifier;
