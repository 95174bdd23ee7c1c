//! Record type names and record schema versions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{RECORD_V1_PREFIX, RECORD_V2_PREFIX};
use crate::error::CoreError;

/// A typed entry stored under a domain.
///
/// The string form is the label hashed into the record's address, so the
/// spelling (including case) is part of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Record {
    Ipfs,
    Arwv,
    Sol,
    Eth,
    Btc,
    Ltc,
    Doge,
    Email,
    Url,
    Discord,
    Github,
    Reddit,
    Twitter,
    Telegram,
    Pic,
    Shdw,
    Point,
    Bsc,
    Injective,
    Backpack,
    A,
    Aaaa,
    Cname,
    Txt,
    Background,
    Base,
    Ipns,
}

impl Record {
    /// Every known record type.
    pub const ALL: [Record; 27] = [
        Record::Ipfs,
        Record::Arwv,
        Record::Sol,
        Record::Eth,
        Record::Btc,
        Record::Ltc,
        Record::Doge,
        Record::Email,
        Record::Url,
        Record::Discord,
        Record::Github,
        Record::Reddit,
        Record::Twitter,
        Record::Telegram,
        Record::Pic,
        Record::Shdw,
        Record::Point,
        Record::Bsc,
        Record::Injective,
        Record::Backpack,
        Record::A,
        Record::Aaaa,
        Record::Cname,
        Record::Txt,
        Record::Background,
        Record::Base,
        Record::Ipns,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Record::Ipfs => "IPFS",
            Record::Arwv => "ARWV",
            Record::Sol => "SOL",
            Record::Eth => "ETH",
            Record::Btc => "BTC",
            Record::Ltc => "LTC",
            Record::Doge => "DOGE",
            Record::Email => "email",
            Record::Url => "url",
            Record::Discord => "discord",
            Record::Github => "github",
            Record::Reddit => "reddit",
            Record::Twitter => "twitter",
            Record::Telegram => "telegram",
            Record::Pic => "pic",
            Record::Shdw => "SHDW",
            Record::Point => "POINT",
            Record::Bsc => "BSC",
            Record::Injective => "INJ",
            Record::Backpack => "backpack",
            Record::A => "A",
            Record::Aaaa => "AAAA",
            Record::Cname => "CNAME",
            Record::Txt => "TXT",
            Record::Background => "background",
            Record::Base => "BASE",
            Record::Ipns => "IPNS",
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Record {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Record::ALL
            .iter()
            .copied()
            .find(|record| record.as_str() == s)
            .ok_or_else(|| CoreError::InvalidInput(format!("unrecognized record: {s}")))
    }
}

/// Record account schema version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordVersion {
    /// Legacy records: raw content, derived without a class.
    V1 = 1,
    /// Current records: validated header, derived under the record class.
    V2 = 2,
}

impl RecordVersion {
    /// Label prefix that distinguishes the two schemas.
    pub const fn prefix(&self) -> &'static str {
        match self {
            RecordVersion::V1 => RECORD_V1_PREFIX,
            RecordVersion::V2 => RECORD_V2_PREFIX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_record_parses_back() {
        for record in Record::ALL {
            assert_eq!(record.as_str().parse::<Record>().unwrap(), record);
        }
    }

    #[test]
    fn test_record_names_are_case_sensitive() {
        assert_eq!("SOL".parse::<Record>().unwrap(), Record::Sol);
        assert!("sol".parse::<Record>().is_err());
        assert_eq!("url".parse::<Record>().unwrap(), Record::Url);
        assert!("URL".parse::<Record>().is_err());
    }

    #[test]
    fn test_version_prefixes() {
        assert_eq!(RecordVersion::V1.prefix().as_bytes(), &[1u8]);
        assert_eq!(RecordVersion::V2.prefix().as_bytes(), &[2u8]);
    }
}
