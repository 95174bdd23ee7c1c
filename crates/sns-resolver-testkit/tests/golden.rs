//! Golden address vectors for cross-implementation verification.
//!
//! Every implementation of SNS address derivation must reproduce these
//! mainnet addresses from the same names.

use serde::Deserialize;
use sns_resolver_core::{Address, AddressDeriver};
use sns_resolver_testkit::{all_vectors, derive_vector, vectors::vectors_json};

/// The exported form of a vector, as another implementation would read it.
#[derive(Debug, Deserialize)]
struct ExportedVector {
    name: String,
    kind: String,
    domain: String,
    expected: String,
}

#[test]
fn golden_vectors_derive_expected_addresses() {
    let deriver = AddressDeriver::default();
    for vector in all_vectors() {
        let derived = derive_vector(&deriver, &vector).unwrap();
        let expected: Address = vector.expected.parse().unwrap();
        assert_eq!(derived, expected, "vector '{}'", vector.name);
    }
}

#[test]
fn golden_vectors_export_as_json() {
    let exported: Vec<ExportedVector> = serde_json::from_str(&vectors_json()).unwrap();
    assert_eq!(exported.len(), all_vectors().len());

    for (exported, vector) in exported.iter().zip(all_vectors()) {
        assert_eq!(exported.name, vector.name);
        assert_eq!(exported.expected, vector.expected);
        assert!(!exported.kind.is_empty());
        assert!(!exported.domain.is_empty());
    }
}
