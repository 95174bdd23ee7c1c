//! Strong type definitions for SNS resolution.
//!
//! Every on-chain account key is an [`Address`], whether or not it
//! corresponds to a signable Ed25519 key.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A 32-byte account address.
///
/// Displays and parses as base58, the way every Solana tool renders keys.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address(pub [u8; 32]);

impl Address {
    /// Create a new Address from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to base58 string.
    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }

    /// Parse from base58 string.
    pub fn from_base58(s: &str) -> Result<Self, CoreError> {
        let mut arr = [0u8; 32];
        let written = bs58::decode(s)
            .onto(&mut arr)
            .map_err(|e| CoreError::InvalidAddress(format!("{s}: {e}")))?;
        if written != 32 {
            return Err(CoreError::InvalidAddress(format!(
                "{s}: expected 32 bytes, got {written}"
            )));
        }
        Ok(Self(arr))
    }

    /// Read an address out of a 32-byte window of `data` starting at `offset`.
    pub fn read(data: &[u8], offset: usize) -> Option<Self> {
        let window = data.get(offset..offset.checked_add(32)?)?;
        Self::try_from(window).ok()
    }

    /// The all-zero address (system program, and the "no parent/class" seed).
    pub const ZERO: Self = Self([0u8; 32]);
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_base58())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl FromStr for Address {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base58(s)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Address {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = std::array::TryFromSliceError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 32] = slice.try_into()?;
        Ok(Self(arr))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base58())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_base58(&s).map_err(serde::de::Error::custom)
    }
}
