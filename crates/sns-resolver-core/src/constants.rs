//! Program ids and well-known accounts of the SNS deployment.
//!
//! Byte tables are spelled out so every constant is usable in `const`
//! context. The base58 form of each address is given in its doc comment and
//! checked by the tests below.

use crate::types::Address;

/// Prefix hashed in front of every name label.
pub const HASH_PREFIX: &str = "SPL Name Service";

/// Seed prefix for the version 1 record scheme.
pub const RECORD_V1_PREFIX: &str = "\x01";

/// Seed prefix for the version 2 record scheme.
pub const RECORD_V2_PREFIX: &str = "\x02";

/// Seed prefix for subdomain labels.
pub const SUBDOMAIN_PREFIX: &str = "\0";

/// Size of the registry header: parent, owner, class.
pub const REGISTRY_HEADER_LEN: usize = 96;

/// `namesLPneVptA9Z5rqUDD9tMTWEJwofgaYwp8cawRkX`
pub const NAME_PROGRAM_ID: Address = Address::from_bytes([
    0x0b, 0xad, 0x51, 0xf4, 0x13, 0xc1, 0xf3, 0xa9,
    0x94, 0x60, 0xd9, 0x00, 0xd8, 0xbf, 0x2e, 0xd6,
    0x92, 0x7e, 0xca, 0x34, 0xd7, 0xb7, 0x84, 0x2b,
    0xf8, 0x10, 0xa9, 0x73, 0x08, 0x2d, 0x1e, 0xdc,
]);

/// `58PwtjSDuFHuUkYjH9BYnnQKHfwo9reZhC2zMJv9JPkx`
pub const ROOT_DOMAIN: Address = Address::from_bytes([
    0x3d, 0x53, 0xc2, 0x4b, 0x38, 0x36, 0x0e, 0xd3,
    0x81, 0x3a, 0x23, 0xdf, 0xb2, 0xdf, 0xd8, 0x20,
    0xab, 0x58, 0x21, 0xcb, 0x79, 0x29, 0xa3, 0x8d,
    0x2e, 0xaa, 0xb2, 0x52, 0xe8, 0x38, 0x25, 0x95,
]);

/// `5eoDkP6vCQBXqDV9YN2NdUs3nmML3dMRNmEYpiyVNBm2`
pub const DEVNET_ROOT_DOMAIN: Address = Address::from_bytes([
    0x45, 0x1d, 0x7f, 0x9f, 0x75, 0x09, 0xb4, 0x99,
    0x86, 0xec, 0x76, 0x55, 0x25, 0xc9, 0x44, 0x66,
    0x7b, 0xc9, 0x19, 0xa8, 0xca, 0xf6, 0xde, 0x93,
    0x8c, 0x52, 0x17, 0xad, 0x15, 0xc2, 0x52, 0x29,
]);

/// `33m47vH6Eav6jr5Ry86XjhRft2jRBLDnDgPSHoquXi2Z`
pub const REVERSE_LOOKUP_CLASS: Address = Address::from_bytes([
    0x1e, 0x6c, 0x58, 0xe4, 0xb1, 0xb5, 0x4a, 0x28,
    0x5b, 0xcf, 0x14, 0x3e, 0xe6, 0xa7, 0x88, 0x35,
    0x6e, 0xfa, 0x86, 0xe2, 0x59, 0xf3, 0xd8, 0xab,
    0x16, 0x6a, 0xf4, 0x0e, 0xf6, 0x2b, 0x49, 0x8e,
]);

/// `7NbD1vprif6apthEZAqhRfYuhrqnuderB8qpnfXGCc8H`
pub const DEVNET_REVERSE_LOOKUP_CLASS: Address = Address::from_bytes([
    0x5e, 0xad, 0xff, 0x29, 0x29, 0xd1, 0x97, 0x7d,
    0x53, 0x7b, 0x39, 0x99, 0xa7, 0xe5, 0xd8, 0xd4,
    0x7d, 0x4f, 0xc7, 0x89, 0xae, 0xd7, 0x77, 0x30,
    0x9a, 0x96, 0xfd, 0xf0, 0x9d, 0x0e, 0x4a, 0xfa,
]);

/// `2pMnqHvei2N5oDcVGCRdZx48gqti199wr5CsyTTafsbo`
pub const RECORD_V2_CLASS: Address = Address::from_bytes([
    0x1a, 0xfd, 0x7e, 0x16, 0x3c, 0x75, 0xfb, 0xeb,
    0xa9, 0xce, 0xa2, 0x81, 0xc9, 0x14, 0x2c, 0x0c,
    0xc5, 0x2e, 0x8c, 0xf8, 0xe4, 0xc9, 0xd5, 0x66,
    0xec, 0xba, 0x96, 0x7f, 0x12, 0x13, 0xf2, 0xaa,
]);

/// `nftD3vbNkNqfj2Sd3HZwbpw4BxxKWr4AjGb9X38JeZk`
pub const NAME_TOKENIZER_ID: Address = Address::from_bytes([
    0x0b, 0xb3, 0x19, 0xf7, 0xa6, 0xa7, 0x1d, 0xb6,
    0x1c, 0x89, 0xb5, 0x21, 0x4b, 0x42, 0x00, 0xc2,
    0x91, 0x54, 0x4e, 0x27, 0xa8, 0x63, 0x61, 0xfe,
    0xe6, 0xdf, 0x09, 0xe9, 0x2f, 0x73, 0x68, 0x77,
]);

/// `85iDfUvr3HJyLM2zcq5BXSiDvUWfw6cSE1FfNBo8Ap29`
pub const NAME_OFFERS_ID: Address = Address::from_bytes([
    0x69, 0x36, 0xbc, 0xc8, 0xf9, 0x07, 0xbc, 0x81,
    0x44, 0xf3, 0x82, 0x06, 0x10, 0x1c, 0xec, 0x28,
    0x46, 0x7c, 0x24, 0xc7, 0x3e, 0xeb, 0x35, 0x98,
    0x9c, 0xe1, 0xd2, 0xbb, 0x5e, 0x28, 0x58, 0x76,
]);

/// `nameaSUMPQLdPzSimWStRKQyuwwiKscgWnZ6FSsT4zn`
pub const DEVNET_NAME_OFFERS_ID: Address = Address::from_bytes([
    0x0b, 0xad, 0x51, 0xed, 0xa9, 0x18, 0xc8, 0x8b,
    0xcd, 0xdf, 0x2f, 0x5c, 0x14, 0x7d, 0x1a, 0xf8,
    0x47, 0x1e, 0xed, 0x00, 0x2c, 0x26, 0x8a, 0x74,
    0x0d, 0xa5, 0x1e, 0x4e, 0x66, 0xd0, 0xc0, 0x53,
]);

/// `TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA`
pub const TOKEN_PROGRAM_ID: Address = Address::from_bytes([
    0x06, 0xdd, 0xf6, 0xe1, 0xd7, 0x65, 0xa1, 0x93,
    0xd9, 0xcb, 0xe1, 0x46, 0xce, 0xeb, 0x79, 0xac,
    0x1c, 0xb4, 0x85, 0xed, 0x5f, 0x5b, 0x37, 0x91,
    0x3a, 0x8c, 0xf5, 0x85, 0x7e, 0xff, 0x00, 0xa9,
]);

/// `ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL`
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Address = Address::from_bytes([
    0x8c, 0x97, 0x25, 0x8f, 0x4e, 0x24, 0x89, 0xf1,
    0xbb, 0x3d, 0x10, 0x29, 0x14, 0x8e, 0x0d, 0x83,
    0x0b, 0x5a, 0x13, 0x99, 0xda, 0xff, 0x10, 0x84,
    0x04, 0x8e, 0x7b, 0xd8, 0xdb, 0xe9, 0xf8, 0x59,
]);

/// `ExXjtfdQe8JacoqP9Z535WzQKjF4CzW1TTRKRgpxvya3`
pub const GUARDIAN: Address = Address::from_bytes([
    0xcf, 0x61, 0xa1, 0xbd, 0xb8, 0x0b, 0x69, 0x31,
    0x74, 0xdd, 0x07, 0x95, 0x87, 0x64, 0x45, 0x13,
    0xd9, 0x4e, 0x5b, 0x84, 0x9c, 0x25, 0x98, 0x2e,
    0x79, 0xa9, 0xc7, 0x2a, 0x91, 0x29, 0xe2, 0x34,
]);
