//! # SNS Resolver Testkit
//!
//! Testing utilities for the SNS resolver.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Mainnet addresses that derivation must reproduce
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Name service accounts written into a memory fetcher
//!
//! ## Golden Vectors
//!
//! ```rust
//! use sns_resolver_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, derived) in verify_all_vectors() {
//!     println!("{name}: {derived} ({matches})");
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use sns_resolver_testkit::fixtures::{SnsFixture, TestWallet};
//!
//! let fixture = SnsFixture::new();
//! let owner = TestWallet::new();
//! let domain = fixture.register_named_domain("bonfida", &owner.address());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{wallets, SnsFixture, TestWallet};
pub use generators::{record_from_parts, RecordParts};
pub use vectors::{all_vectors, derive_vector, verify_all_vectors, GoldenVector, VectorKind};
