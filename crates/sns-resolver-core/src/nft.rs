//! Tokenization accounts: the NFT record of a tokenized domain and the
//! token account that holds its mint.

use crate::error::{CoreError, Result};
use crate::types::Address;

/// Encoded size of an [`NftAccount`].
pub const NFT_ACCOUNT_LEN: usize = 98;

/// Minimum size of a token account: mint, owner, amount.
pub const TOKEN_ACCOUNT_MIN_LEN: usize = 72;

/// Size of a token account as allocated by the token program.
pub const TOKEN_ACCOUNT_LEN: usize = 165;

/// State of a domain's NFT record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NftTag {
    Uninitialized = 0,
    CentralState = 1,
    /// The domain is tokenized; ownership follows the NFT.
    ActiveRecord = 2,
    /// The NFT was redeemed; ownership is back on the registry.
    InactiveRecord = 3,
}

impl TryFrom<u8> for NftTag {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(NftTag::Uninitialized),
            1 => Ok(NftTag::CentralState),
            2 => Ok(NftTag::ActiveRecord),
            3 => Ok(NftTag::InactiveRecord),
            other => Err(CoreError::InvalidSerializedData(format!("unknown nft tag {other}"))),
        }
    }
}

/// The NFT record account of a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NftAccount {
    pub tag: NftTag,
    pub nonce: u8,
    pub name_account: Address,
    pub owner: Address,
    pub mint: Address,
}

impl NftAccount {
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != NFT_ACCOUNT_LEN {
            return Err(CoreError::InvalidSerializedData(format!(
                "nft record must be {NFT_ACCOUNT_LEN} bytes, got {}",
                bytes.len()
            )));
        }
        let field = |offset: usize| {
            Address::read(bytes, offset)
                .ok_or_else(|| CoreError::InvalidSerializedData(format!("nft field at {offset}")))
        };

        Ok(Self {
            tag: NftTag::try_from(bytes[0])?,
            nonce: bytes[1],
            name_account: field(2)?,
            owner: field(34)?,
            mint: field(66)?,
        })
    }

    pub fn encode(&self) -> [u8; NFT_ACCOUNT_LEN] {
        let mut out = [0u8; NFT_ACCOUNT_LEN];
        out[0] = self.tag as u8;
        out[1] = self.nonce;
        out[2..34].copy_from_slice(self.name_account.as_bytes());
        out[34..66].copy_from_slice(self.owner.as_bytes());
        out[66..98].copy_from_slice(self.mint.as_bytes());
        out
    }

    pub fn is_active(&self) -> bool {
        self.tag == NftTag::ActiveRecord
    }
}

/// The leading fields of a token account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAccount {
    pub mint: Address,
    pub owner: Address,
    pub amount: u64,
}

impl TokenAccount {
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < TOKEN_ACCOUNT_MIN_LEN {
            return Err(CoreError::InvalidSerializedData(format!(
                "token account needs {TOKEN_ACCOUNT_MIN_LEN} bytes, got {}",
                bytes.len()
            )));
        }
        let mut amount = [0u8; 8];
        amount.copy_from_slice(&bytes[64..72]);

        Ok(Self {
            mint: Address::read(bytes, 0)
                .ok_or_else(|| CoreError::InvalidSerializedData("token mint".into()))?,
            owner: Address::read(bytes, 32)
                .ok_or_else(|| CoreError::InvalidSerializedData("token owner".into()))?,
            amount: u64::from_le_bytes(amount),
        })
    }

    /// Encode as a full-size token account; fields past `amount` are zeroed.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = vec![0u8; TOKEN_ACCOUNT_LEN];
        out[0..32].copy_from_slice(self.mint.as_bytes());
        out[32..64].copy_from_slice(self.owner.as_bytes());
        out[64..72].copy_from_slice(&self.amount.to_le_bytes());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NftAccount {
        NftAccount {
            tag: NftTag::ActiveRecord,
            nonce: 254,
            name_account: Address::from_bytes([1; 32]),
            owner: Address::from_bytes([2; 32]),
            mint: Address::from_bytes([3; 32]),
        }
    }

    #[test]
    fn test_nft_layout() {
        let bytes = sample().encode();
        assert_eq!(bytes[0], 2);
        assert_eq!(bytes[1], 254);
        assert_eq!(&bytes[66..98], &[3u8; 32]);
        assert_eq!(NftAccount::decode(&bytes).unwrap(), sample());
    }

    #[test]
    fn test_nft_wrong_length() {
        let mut bytes = sample().encode().to_vec();
        bytes.push(0);
        let result = NftAccount::decode(&bytes);
        assert!(matches!(result, Err(CoreError::InvalidSerializedData(_))));
    }

    #[test]
    fn test_nft_unknown_tag() {
        let mut bytes = sample().encode();
        bytes[0] = 9;
        let result = NftAccount::decode(&bytes);
        assert!(matches!(result, Err(CoreError::InvalidSerializedData(_))));
    }

    #[test]
    fn test_inactive_record_is_not_active() {
        let mut nft = sample();
        nft.tag = NftTag::InactiveRecord;
        assert!(!nft.is_active());
    }

    #[test]
    fn test_token_account_layout() {
        let token = TokenAccount {
            mint: Address::from_bytes([4; 32]),
            owner: Address::from_bytes([5; 32]),
            amount: 1,
        };
        let bytes = token.encode();
        assert_eq!(bytes.len(), TOKEN_ACCOUNT_LEN);
        assert_eq!(TokenAccount::decode(&bytes).unwrap(), token);
        assert!(TokenAccount::decode(&bytes[..71]).is_err());
    }
}
