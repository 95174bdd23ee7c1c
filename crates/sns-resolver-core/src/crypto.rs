//! Cryptographic primitives for SNS resolution.
//!
//! Wraps SHA-256 name hashing, Ed25519 curve membership and signature
//! verification, and the program-derived address scheme.
//!
//! ## Design Notes
//!
//! - Curve membership goes through `curve25519-dalek` point decompression,
//!   the same test the chain runtime applies. No field arithmetic lives here.
//! - [`find_program_address`] walks bump seeds from 255 down to 1 and keeps
//!   the first candidate that is off the curve, so its output never has a
//!   private key.

use curve25519_dalek::edwards::CompressedEdwardsY;
use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::constants::HASH_PREFIX;
use crate::error::{CoreError, Result};
use crate::types::Address;

/// Marker appended to every program-derived address preimage.
pub const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

/// Maximum length of a single seed.
pub const MAX_SEED_LEN: usize = 32;

/// Maximum number of seeds, bump included.
pub const MAX_SEEDS: usize = 16;

/// A 32-byte hashed name label.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashedName(pub [u8; 32]);

impl HashedName {
    /// Hash a label with the name service prefix.
    pub fn of(label: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(HASH_PREFIX.as_bytes());
        hasher.update(label.as_bytes());
        Self(hasher.finalize().into())
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for HashedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashedName({})", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for HashedName {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Whether `address` is the encoding of a point on the Ed25519 curve.
///
/// Wallet keys are on the curve. Program-derived addresses are not.
pub fn is_on_curve(address: &Address) -> bool {
    CompressedEdwardsY(address.0).decompress().is_some()
}

/// Verify an Ed25519 signature over `message` made by `signer`.
///
/// Any malformed key or signature counts as a failed verification.
pub fn verify_signature(signer: &Address, message: &[u8], signature: &[u8]) -> bool {
    let Ok(key) = VerifyingKey::from_bytes(signer.as_bytes()) else {
        return false;
    };
    let Ok(sig) = Signature::from_slice(signature) else {
        return false;
    };
    key.verify(message, &sig).is_ok()
}

/// Compute the program address for a full seed list, bump included.
///
/// Returns `None` when the candidate lands on the curve.
pub fn create_program_address(seeds: &[&[u8]], program_id: &Address) -> Result<Option<Address>> {
    if seeds.len() > MAX_SEEDS {
        return Err(CoreError::InvalidInput(format!(
            "{} seeds exceeds the maximum of {MAX_SEEDS}",
            seeds.len()
        )));
    }
    let mut hasher = Sha256::new();
    for seed in seeds {
        if seed.len() > MAX_SEED_LEN {
            return Err(CoreError::InvalidInput(format!(
                "seed of {} bytes exceeds the maximum of {MAX_SEED_LEN}",
                seed.len()
            )));
        }
        hasher.update(seed);
    }
    hasher.update(program_id.as_bytes());
    hasher.update(PDA_MARKER);
    let candidate = Address::from_bytes(hasher.finalize().into());

    if is_on_curve(&candidate) {
        return Ok(None);
    }
    Ok(Some(candidate))
}

/// Find the canonical program-derived address and bump for `seeds`.
pub fn find_program_address(seeds: &[&[u8]], program_id: &Address) -> Result<(Address, u8)> {
    for bump in (1..=u8::MAX).rev() {
        let bump_seed = [bump];
        let mut with_bump: Vec<&[u8]> = Vec::with_capacity(seeds.len() + 1);
        with_bump.extend_from_slice(seeds);
        with_bump.push(&bump_seed);
        if let Some(address) = create_program_address(&with_bump, program_id)? {
            return Ok((address, bump));
        }
    }
    Err(CoreError::NoViableBump)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NAME_PROGRAM_ID;
    use ed25519_dalek::{Signer, SigningKey};

    #[test]
    fn test_hashed_name_is_deterministic() {
        assert_eq!(HashedName::of("bonfida"), HashedName::of("bonfida"));
        assert_ne!(HashedName::of("bonfida"), HashedName::of("bonfid4"));
    }

    #[test]
    fn test_hashed_name_includes_prefix() {
        let plain: [u8; 32] = Sha256::digest(b"bonfida").into();
        assert_ne!(HashedName::of("bonfida").0, plain);

        let prefixed: [u8; 32] = Sha256::digest(b"SPL Name Servicebonfida").into();
        assert_eq!(HashedName::of("bonfida").0, prefixed);
    }

    #[test]
    fn test_wallet_key_is_on_curve() {
        let key = SigningKey::from_bytes(&[0x42; 32]);
        let address = Address::from_bytes(key.verifying_key().to_bytes());
        assert!(is_on_curve(&address));
    }

    #[test]
    fn test_known_fixtures_on_and_off_curve() {
        // Program ids are key pair public keys; the root domain is derived.
        assert!(is_on_curve(&NAME_PROGRAM_ID));
        assert!(is_on_curve(&crate::constants::GUARDIAN));
        assert!(!is_on_curve(&crate::constants::ROOT_DOMAIN));
    }

    #[test]
    fn test_derived_address_is_off_curve() {
        let hashed = HashedName::of("bonfida");
        let (address, _) =
            find_program_address(&[hashed.as_bytes(), &[0u8; 32], &[0u8; 32]], &NAME_PROGRAM_ID)
                .unwrap();
        assert!(!is_on_curve(&address));
    }

    #[test]
    fn test_find_matches_create_with_returned_bump() {
        let seeds: [&[u8]; 2] = [b"nft_record", &[9u8; 32]];
        let (address, bump) = find_program_address(&seeds, &NAME_PROGRAM_ID).unwrap();
        let again = create_program_address(&[seeds[0], seeds[1], &[bump]], &NAME_PROGRAM_ID)
            .unwrap();
        assert_eq!(again, Some(address));
    }

    #[test]
    fn test_oversized_seed_rejected() {
        let long = [0u8; 33];
        let result = find_program_address(&[&long], &NAME_PROGRAM_ID);
        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn test_verify_signature() {
        let key = SigningKey::from_bytes(&[0x11; 32]);
        let signer = Address::from_bytes(key.verifying_key().to_bytes());
        let sig = key.sign(b"message");

        assert!(verify_signature(&signer, b"message", &sig.to_bytes()));
        assert!(!verify_signature(&signer, b"other", &sig.to_bytes()));
        assert!(!verify_signature(&signer, b"message", &[0u8; 12]));
    }
}
