//! Proptest generators for property-based testing.

use proptest::prelude::*;

use sns_resolver_core::{Address, Record, RecordAccount, Validation, ValidationLengths};

use crate::fixtures::TestWallet;

/// Generate a random Address.
pub fn address() -> impl Strategy<Value = Address> {
    any::<[u8; 32]>().prop_map(Address::from_bytes)
}

/// Generate a wallet from a random seed.
pub fn wallet() -> impl Strategy<Value = TestWallet> {
    any::<[u8; 32]>().prop_map(TestWallet::from_seed)
}

/// Generate a Validation kind.
pub fn validation() -> impl Strategy<Value = Validation> {
    prop_oneof![
        Just(Validation::None),
        Just(Validation::Solana),
        Just(Validation::Ethereum),
        Just(Validation::UnverifiedSolana),
    ]
}

/// Generate a record type.
pub fn record_type() -> impl Strategy<Value = Record> {
    prop::sample::select(Record::ALL.to_vec())
}

/// Generate a domain label.
pub fn label() -> impl Strategy<Value = String> {
    "[a-z0-9][a-z0-9-]{0,23}".prop_map(String::from)
}

/// Generate record content bytes of specified max length.
pub fn content(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Parameters for generating a version 2 record.
#[derive(Debug, Clone)]
pub struct RecordParts {
    pub staleness_validation: Validation,
    pub staleness_id: Vec<u8>,
    pub roa_validation: Validation,
    pub roa_id: Vec<u8>,
    pub content: Vec<u8>,
}

impl Arbitrary for RecordParts {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        let lengths = ValidationLengths::STANDARD;
        (
            validation(),
            any::<[u8; 32]>(),
            validation(),
            any::<[u8; 32]>(),
            content(256),
        )
            .prop_map(move |(staleness, staleness_id, roa, roa_id, content)| RecordParts {
                staleness_validation: staleness,
                staleness_id: staleness_id[..lengths.len(staleness)].to_vec(),
                roa_validation: roa,
                roa_id: roa_id[..lengths.len(roa)].to_vec(),
                content,
            })
            .boxed()
    }
}

/// Build a record from parameters.
pub fn record_from_parts(parts: &RecordParts) -> RecordAccount {
    RecordAccount::new(
        parts.staleness_validation,
        &parts.staleness_id,
        parts.roa_validation,
        &parts.roa_id,
        &parts.content,
    )
}
