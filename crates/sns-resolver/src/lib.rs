//! # SNS Resolver
//!
//! Resolution of Solana Name Service domains to the addresses they point to.
//!
//! ## Overview
//!
//! A domain resolves, in order of precedence, to:
//!
//! - **NFT holder**: the wallet holding the domain's NFT, when tokenized
//! - **SOL record v2**: a fresh record whose right of association matches
//! - **SOL record v1**: a stored address signed by the registry owner
//! - **Registry owner**: subject to the program-derived owner policy
//!
//! Around resolution the [`Resolver`] also answers reverse lookups, record
//! retrieval with verification, primary domains, and owner scans.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sns_resolver::{ResolveOptions, Resolver};
//! use sns_resolver::fetch::MemoryFetcher;
//!
//! async fn example() {
//!     let resolver = Resolver::new(MemoryFetcher::new());
//!
//!     let target = resolver
//!         .resolve_domain("bonfida.sol", &ResolveOptions::default())
//!         .await
//!         .unwrap();
//!     println!("bonfida.sol -> {target}");
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `sns_resolver::core` - Derivation, codecs, and verification primitives
//! - `sns_resolver::fetch` - The account fetcher abstraction

pub mod config;
pub mod error;
pub mod primary;
pub mod records;
pub mod resolver;
pub mod reverse;
pub mod steps;

// Re-export component crates
pub use sns_resolver_core as core;
pub use sns_resolver_fetch as fetch;

// Re-export main types for convenience
pub use config::{AllowPda, ResolveOptions, ResolverConfig};
pub use error::{ResolveError, Result};
pub use primary::PrimaryDomain;
pub use records::{DomainRecord, RecordVerification};
pub use resolver::Resolver;
pub use reverse::{OwnedDomain, RegisteredDomain, Subdomain};
pub use steps::Step;

pub use sns_resolver_core::{Address, ProtocolConfig, Record, RecordVersion};
