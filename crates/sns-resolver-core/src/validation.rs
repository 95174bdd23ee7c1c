//! Staleness and right-of-association checks for version 2 records.
//!
//! A record carries two independent proofs. Staleness ties the record to
//! the domain owner at the time it was written; right of association (RoA)
//! ties it to the subject named in its content. Both are plain byte
//! comparisons here: the signatures behind them were checked on chain.

use crate::config::{ProtocolConfig, RecordPolicy};
use crate::error::Result;
use crate::record::{RecordAccount, Validation, ValidationLengths};
use crate::record_type::Record;
use crate::types::Address;

/// Verifies decoded records against a [`RecordPolicy`].
#[derive(Debug, Clone, Copy)]
pub struct RecordVerifier<'a> {
    policy: &'a RecordPolicy,
    lengths: &'a ValidationLengths,
}

impl<'a> RecordVerifier<'a> {
    pub fn new(policy: &'a RecordPolicy, lengths: &'a ValidationLengths) -> Self {
        Self { policy, lengths }
    }

    pub fn from_config(config: &'a ProtocolConfig) -> Self {
        Self::new(&config.records, &config.validation_lengths)
    }

    /// True iff the record was last validated by `domain_owner`.
    pub fn verify_staleness(&self, domain_owner: &Address, record: &RecordAccount) -> Result<bool> {
        let slices = record.slices(self.lengths)?;
        Ok(record.header.staleness_validation == Validation::Solana
            && slices.staleness_id == domain_owner.as_bytes())
    }

    /// The verifier to use when the caller supplies none.
    ///
    /// Self-signed records are verified by their own content; guardian
    /// records by the guardian key. Other records have no default.
    pub fn default_verifier(
        &self,
        record_type: Record,
        record: &RecordAccount,
    ) -> Result<Option<Vec<u8>>> {
        if self.policy.is_self_signed(record_type) {
            return Ok(Some(record.slices(self.lengths)?.content.to_vec()));
        }
        Ok(self
            .policy
            .guardian(record_type)
            .map(|guardian| guardian.as_bytes().to_vec()))
    }

    /// Validation kind the RoA proof of `record_type` must carry.
    pub fn expected_roa_validation(&self, record_type: Record) -> Validation {
        if self.policy.uses_eth_roa(record_type) {
            Validation::Ethereum
        } else {
            Validation::Solana
        }
    }

    /// True iff the RoA id equals `verifier` with the expected kind.
    pub fn verify_roa(
        &self,
        record_type: Record,
        record: &RecordAccount,
        verifier: &[u8],
    ) -> Result<bool> {
        let slices = record.slices(self.lengths)?;
        Ok(slices.roa_id == verifier
            && record.header.roa_validation == self.expected_roa_validation(record_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GUARDIAN;

    fn config() -> ProtocolConfig {
        ProtocolConfig::default()
    }

    fn owner() -> Address {
        Address::from_bytes([0xaa; 32])
    }

    #[test]
    fn test_staleness_requires_solana_kind_and_owner() {
        let config = config();
        let verifier = RecordVerifier::from_config(&config);

        let fresh = RecordAccount::new(
            Validation::Solana,
            owner().as_bytes(),
            Validation::None,
            &[],
            b"x",
        );
        assert!(verifier.verify_staleness(&owner(), &fresh).unwrap());

        let other_owner = Address::from_bytes([0xbb; 32]);
        assert!(!verifier.verify_staleness(&other_owner, &fresh).unwrap());

        let unverified = RecordAccount::new(
            Validation::UnverifiedSolana,
            owner().as_bytes(),
            Validation::None,
            &[],
            b"x",
        );
        assert!(!verifier.verify_staleness(&owner(), &unverified).unwrap());
    }

    #[test]
    fn test_default_verifier_self_signed() {
        let config = config();
        let verifier = RecordVerifier::from_config(&config);
        let content = [0x33u8; 32];
        let record = RecordAccount::new(Validation::None, &[], Validation::None, &[], &content);

        assert_eq!(
            verifier.default_verifier(Record::Sol, &record).unwrap(),
            Some(content.to_vec())
        );
    }

    #[test]
    fn test_default_verifier_guardian() {
        let config = config();
        let verifier = RecordVerifier::from_config(&config);
        let record =
            RecordAccount::new(Validation::None, &[], Validation::None, &[], b"example.com");

        assert_eq!(
            verifier.default_verifier(Record::Url, &record).unwrap(),
            Some(GUARDIAN.as_bytes().to_vec())
        );
        assert_eq!(verifier.default_verifier(Record::Twitter, &record).unwrap(), None);
    }

    #[test]
    fn test_roa_eth_records_need_ethereum_kind() {
        let config = config();
        let verifier = RecordVerifier::from_config(&config);
        let eth = [0x44u8; 20];

        let good = RecordAccount::new(Validation::None, &[], Validation::Ethereum, &eth, &eth);
        assert!(verifier.verify_roa(Record::Eth, &good, &eth).unwrap());

        let padded = [0x44u8; 32];
        let wrong_kind =
            RecordAccount::new(Validation::None, &[], Validation::Solana, &padded, &eth);
        assert!(!verifier.verify_roa(Record::Eth, &wrong_kind, &padded).unwrap());
    }

    #[test]
    fn test_roa_solana_records() {
        let config = config();
        let verifier = RecordVerifier::from_config(&config);
        let key = [0x55u8; 32];
        let record = RecordAccount::new(Validation::None, &[], Validation::Solana, &key, &key);

        assert!(verifier.verify_roa(Record::Sol, &record, &key).unwrap());
        assert!(!verifier.verify_roa(Record::Sol, &record, &[0u8; 32]).unwrap());
    }

    #[test]
    fn test_custom_policy() {
        let mut config = config();
        let custom = Address::from_bytes([0x66; 32]);
        config.records.guardians.insert(Record::Twitter, custom);
        let verifier = RecordVerifier::from_config(&config);
        let record = RecordAccount::new(Validation::None, &[], Validation::None, &[], b"@sns");

        assert_eq!(
            verifier.default_verifier(Record::Twitter, &record).unwrap(),
            Some(custom.as_bytes().to_vec())
        );
    }
}
