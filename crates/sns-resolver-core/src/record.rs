//! Version 2 record accounts.
//!
//! A record account is a registry account whose trailing data starts with an
//! 8-byte [`RecordHeader`] followed by a body:
//!
//! ```text
//! [0..96)    registry header (parent, owner, class)
//! [96..98)   staleness validation kind, u16 LE
//! [98..100)  right-of-association validation kind, u16 LE
//! [100..104) content length, u32 LE
//! [104..)    staleness id ++ roa id ++ content
//! ```
//!
//! ## Design Notes
//!
//! - Slice boundaries are never stored. They are recomputed from the two
//!   validation kinds through a [`ValidationLengths`] table every time.
//! - The content slice is the whole remainder of the body. The stored
//!   content length is reported but not used to truncate.

use serde::{Deserialize, Serialize};

use crate::constants::REGISTRY_HEADER_LEN;
use crate::error::{CoreError, Result};

/// Size of the record header.
pub const RECORD_HEADER_LEN: usize = 8;

/// How an identifier inside a record was validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum Validation {
    None = 0,
    Solana = 1,
    Ethereum = 2,
    UnverifiedSolana = 3,
}

impl Validation {
    /// Wire value of this kind.
    pub const fn as_u16(&self) -> u16 {
        *self as u16
    }
}

impl TryFrom<u16> for Validation {
    type Error = CoreError;

    fn try_from(value: u16) -> Result<Self> {
        match value {
            0 => Ok(Validation::None),
            1 => Ok(Validation::Solana),
            2 => Ok(Validation::Ethereum),
            3 => Ok(Validation::UnverifiedSolana),
            other => Err(CoreError::RecordMalformed(format!(
                "unknown validation kind {other}"
            ))),
        }
    }
}

/// Byte length of the identifier carried for each validation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationLengths {
    pub none: usize,
    pub solana: usize,
    pub ethereum: usize,
    pub unverified_solana: usize,
}

impl ValidationLengths {
    /// Lengths used by the deployed record program.
    pub const STANDARD: Self = Self {
        none: 0,
        solana: 32,
        ethereum: 20,
        unverified_solana: 32,
    };

    pub const fn len(&self, kind: Validation) -> usize {
        match kind {
            Validation::None => self.none,
            Validation::Solana => self.solana,
            Validation::Ethereum => self.ethereum,
            Validation::UnverifiedSolana => self.unverified_solana,
        }
    }
}

impl Default for ValidationLengths {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// The fixed header of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    pub staleness_validation: Validation,
    pub roa_validation: Validation,
    pub content_length: u32,
}

impl RecordHeader {
    /// Decode a header from the first 8 bytes of `data`.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let bytes = data.get(..RECORD_HEADER_LEN).ok_or_else(|| {
            CoreError::RecordMalformed(format!(
                "record header needs {RECORD_HEADER_LEN} bytes, got {}",
                data.len()
            ))
        })?;
        let staleness = u16::from_le_bytes([bytes[0], bytes[1]]);
        let roa = u16::from_le_bytes([bytes[2], bytes[3]]);
        let content_length = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);

        Ok(Self {
            staleness_validation: Validation::try_from(staleness)?,
            roa_validation: Validation::try_from(roa)?,
            content_length,
        })
    }

    pub fn encode(&self) -> [u8; RECORD_HEADER_LEN] {
        let mut out = [0u8; RECORD_HEADER_LEN];
        out[0..2].copy_from_slice(&self.staleness_validation.as_u16().to_le_bytes());
        out[2..4].copy_from_slice(&self.roa_validation.as_u16().to_le_bytes());
        out[4..8].copy_from_slice(&self.content_length.to_le_bytes());
        out
    }
}

/// A decoded version 2 record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordAccount {
    pub header: RecordHeader,
    pub body: Vec<u8>,
}

/// Borrowed views into a record body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSlices<'a> {
    pub staleness_id: &'a [u8],
    pub roa_id: &'a [u8],
    pub content: &'a [u8],
}

impl RecordAccount {
    /// Build a record from its three parts. The header's content length is
    /// taken from `content` and saturates at `u32::MAX`; decoding does not
    /// read it.
    pub fn new(
        staleness_validation: Validation,
        staleness_id: &[u8],
        roa_validation: Validation,
        roa_id: &[u8],
        content: &[u8],
    ) -> Self {
        let mut body = Vec::with_capacity(staleness_id.len() + roa_id.len() + content.len());
        body.extend_from_slice(staleness_id);
        body.extend_from_slice(roa_id);
        body.extend_from_slice(content);
        Self {
            header: RecordHeader {
                staleness_validation,
                roa_validation,
                content_length: content_length(content.len()),
            },
            body,
        }
    }

    /// Decode a record from full account bytes, registry header included.
    pub fn decode(account_data: &[u8]) -> Result<Self> {
        Self::decode_with(account_data, &ValidationLengths::STANDARD)
    }

    /// Decode a record from full account bytes with explicit lengths.
    pub fn decode_with(account_data: &[u8], lengths: &ValidationLengths) -> Result<Self> {
        let trailing = account_data.get(REGISTRY_HEADER_LEN..).ok_or_else(|| {
            CoreError::RecordMalformed(format!(
                "record account needs at least {} bytes, got {}",
                REGISTRY_HEADER_LEN + RECORD_HEADER_LEN,
                account_data.len()
            ))
        })?;
        Self::decode_trailing(trailing, lengths)
    }

    /// Decode a record from registry trailing data (header ++ body).
    pub fn decode_trailing(data: &[u8], lengths: &ValidationLengths) -> Result<Self> {
        let header = RecordHeader::decode(data)?;
        let record = Self {
            header,
            body: data[RECORD_HEADER_LEN..].to_vec(),
        };
        record.slices(lengths)?;
        Ok(record)
    }

    /// Encode as registry trailing data (header ++ body).
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(RECORD_HEADER_LEN + self.body.len());
        out.extend_from_slice(&self.header.encode());
        out.extend_from_slice(&self.body);
        out
    }

    /// Split the body according to the two validation kinds.
    pub fn slices(&self, lengths: &ValidationLengths) -> Result<RecordSlices<'_>> {
        let staleness_len = lengths.len(self.header.staleness_validation);
        let roa_len = lengths.len(self.header.roa_validation);
        let content_start = staleness_len + roa_len;

        if self.body.len() < content_start {
            return Err(CoreError::RecordMalformed(format!(
                "record body of {} bytes is shorter than its {} validation bytes",
                self.body.len(),
                content_start
            )));
        }

        Ok(RecordSlices {
            staleness_id: &self.body[..staleness_len],
            roa_id: &self.body[staleness_len..content_start],
            content: &self.body[content_start..],
        })
    }

    /// Identifier that proves the record is fresh.
    pub fn staleness_id(&self) -> Result<&[u8]> {
        Ok(self.slices(&ValidationLengths::STANDARD)?.staleness_id)
    }

    /// Identifier that proves the record subject accepted the association.
    pub fn roa_id(&self) -> Result<&[u8]> {
        Ok(self.slices(&ValidationLengths::STANDARD)?.roa_id)
    }

    pub fn content(&self) -> Result<&[u8]> {
        Ok(self.slices(&ValidationLengths::STANDARD)?.content)
    }
}

fn content_length(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
