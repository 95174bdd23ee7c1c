//! Primary domain accounts.

use crate::error::{CoreError, Result};
use crate::types::Address;

/// Encoded size of a [`PrimaryDomainAccount`]. Trailing allocation is ignored.
pub const PRIMARY_DOMAIN_LEN: usize = 33;

/// The domain a wallet selected as its primary (favourite) name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimaryDomainAccount {
    pub tag: u8,
    pub name_account: Address,
}

impl PrimaryDomainAccount {
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < PRIMARY_DOMAIN_LEN {
            return Err(CoreError::InvalidSerializedData(format!(
                "primary domain account needs {PRIMARY_DOMAIN_LEN} bytes, got {}",
                bytes.len()
            )));
        }
        let name_account = Address::read(bytes, 1)
            .ok_or_else(|| CoreError::InvalidSerializedData("primary name account".into()))?;
        Ok(Self {
            tag: bytes[0],
            name_account,
        })
    }

    pub fn encode(&self) -> [u8; PRIMARY_DOMAIN_LEN] {
        let mut out = [0u8; PRIMARY_DOMAIN_LEN];
        out[0] = self.tag;
        out[1..].copy_from_slice(self.name_account.as_bytes());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_layout() {
        let primary = PrimaryDomainAccount {
            tag: 1,
            name_account: Address::from_bytes([8; 32]),
        };
        let bytes = primary.encode();
        assert_eq!(bytes[0], 1);
        assert_eq!(PrimaryDomainAccount::decode(&bytes).unwrap(), primary);
    }

    #[test]
    fn test_primary_too_short() {
        let result = PrimaryDomainAccount::decode(&[0u8; 32]);
        assert!(matches!(result, Err(CoreError::InvalidSerializedData(_))));
    }

    #[test]
    fn test_primary_ignores_trailing_allocation() {
        let mut bytes = vec![0u8; 40];
        bytes[1..33].copy_from_slice(&[4u8; 32]);
        let primary = PrimaryDomainAccount::decode(&bytes).unwrap();
        assert_eq!(primary.name_account, Address::from_bytes([4u8; 32]));
    }
}
