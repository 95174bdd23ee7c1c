//! Name registry accounts and reverse lookup payloads.

use crate::constants::REGISTRY_HEADER_LEN;
use crate::error::{CoreError, Result};
use crate::types::Address;

/// A name registry account: a 96-byte header plus opaque trailing data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryAccount {
    /// Parent name account; the root domain for top-level names.
    pub parent_name: Address,
    pub owner: Address,
    pub class: Address,
    pub data: Vec<u8>,
}

impl RegistryAccount {
    pub fn new(parent_name: Address, owner: Address, class: Address, data: Vec<u8>) -> Self {
        Self {
            parent_name,
            owner,
            class,
            data,
        }
    }

    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < REGISTRY_HEADER_LEN {
            return Err(CoreError::InvalidSerializedData(format!(
                "registry account needs {REGISTRY_HEADER_LEN} bytes, got {}",
                bytes.len()
            )));
        }
        let field = |offset: usize| {
            Address::read(bytes, offset).ok_or_else(|| {
                CoreError::InvalidSerializedData(format!("registry field at {offset}"))
            })
        };

        Ok(Self {
            parent_name: field(0)?,
            owner: field(32)?,
            class: field(64)?,
            data: bytes[REGISTRY_HEADER_LEN..].to_vec(),
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(REGISTRY_HEADER_LEN + self.data.len());
        out.extend_from_slice(self.parent_name.as_bytes());
        out.extend_from_slice(self.owner.as_bytes());
        out.extend_from_slice(self.class.as_bytes());
        out.extend_from_slice(&self.data);
        out
    }
}

/// Decode the name stored in a reverse lookup account's trailing data.
///
/// The payload is a u32 LE length followed by that many UTF-8 bytes.
/// Subdomain reverses store their label with a leading `\0`, removed when
/// `trim_leading_nul` is set.
pub fn decode_reverse(data: &[u8], trim_leading_nul: bool) -> Result<String> {
    let len_bytes: [u8; 4] = data
        .get(..4)
        .and_then(|b| b.try_into().ok())
        .ok_or_else(|| CoreError::InvalidSerializedData("reverse payload too short".into()))?;
    let len = u32::from_le_bytes(len_bytes) as usize;
    let name_bytes = data.get(4..4 + len).ok_or_else(|| {
        CoreError::InvalidSerializedData(format!(
            "reverse payload declares {len} bytes, has {}",
            data.len() - 4
        ))
    })?;
    let name = std::str::from_utf8(name_bytes)
        .map_err(|e| CoreError::InvalidSerializedData(format!("reverse name: {e}")))?;

    if trim_leading_nul {
        Ok(name.strip_prefix('\0').unwrap_or(name).to_string())
    } else {
        Ok(name.to_string())
    }
}

/// Encode a name as a reverse lookup payload.
pub fn encode_reverse(name: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(4 + name.len());
    out.extend_from_slice(&length_prefix(name.len())?);
    out.extend_from_slice(name.as_bytes());
    Ok(out)
}

/// A u32 LE length prefix; lengths past `u32::MAX` are rejected.
pub(crate) fn length_prefix(len: usize) -> Result<[u8; 4]> {
    u32::try_from(len)
        .map(u32::to_le_bytes)
        .map_err(|_| CoreError::InvalidInput(format!("length {len} does not fit in u32")))
}
