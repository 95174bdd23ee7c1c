//! Deterministic address derivation for names, records, and the accounts
//! that hang off a domain.
//!
//! ## Key Types
//!
//! - [`AddressDeriver`] - derives every address from a [`ProgramAddresses`] table
//! - [`DomainKey`] - a derived domain address with its parent context
//!
//! ## Name Shapes
//!
//! A trailing `.sol` is ignored. Then:
//!
//! - `a` is a root domain: `derive(a, ROOT)`
//! - `a.b` is a subdomain: `derive("\0" + a, derive(b, ROOT))`
//! - `r.a` with a record version is a record on `a`
//! - `r.s.a` with a record version is a record on the subdomain `s.a`
//!
//! Anything else is rejected.

use crate::config::ProgramAddresses;
use crate::constants::SUBDOMAIN_PREFIX;
use crate::crypto::{find_program_address, HashedName};
use crate::error::{CoreError, Result};
use crate::record_type::{Record, RecordVersion};
use crate::types::Address;

/// A derived domain, subdomain, or record address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainKey {
    pub address: Address,
    /// The top-level domain for subdomains and records; `None` for roots.
    pub parent: Option<Address>,
    pub is_sub: bool,
    /// Set for a record that lives under a subdomain.
    pub is_sub_record: bool,
}

/// Derives addresses for one deployment.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressDeriver {
    programs: ProgramAddresses,
}

/// Strip a trailing `.sol` if present.
pub fn trim_tld(domain: &str) -> &str {
    domain.strip_suffix(".sol").unwrap_or(domain)
}

impl AddressDeriver {
    pub fn new(programs: ProgramAddresses) -> Self {
        Self { programs }
    }

    pub fn programs(&self) -> &ProgramAddresses {
        &self.programs
    }

    /// Derive the name account for a label under optional parent and class.
    pub fn derive_address(
        &self,
        label: &str,
        parent: Option<&Address>,
        class: Option<&Address>,
    ) -> Result<Address> {
        let hashed = HashedName::of(label);
        let class = class.unwrap_or(&Address::ZERO);
        let parent = parent.unwrap_or(&Address::ZERO);
        let (address, _) = find_program_address(
            &[hashed.as_bytes(), class.as_bytes(), parent.as_bytes()],
            &self.programs.name_program,
        )?;
        Ok(address)
    }

    /// Derive the registry key of a domain or subdomain.
    pub fn domain_key(&self, domain: &str) -> Result<DomainKey> {
        self.name_key(domain, None)
    }

    /// Derive a key, treating the first label as a record name when
    /// `record` is set.
    pub fn name_key(&self, name: &str, record: Option<RecordVersion>) -> Result<DomainKey> {
        let name = trim_tld(name);
        let labels: Vec<&str> = name.split('.').collect();
        if let Some(empty) = labels.iter().position(|l| l.is_empty()) {
            return Err(CoreError::InvalidInput(format!(
                "empty label at position {empty} in {name:?}"
            )));
        }
        let root = self.programs.root_domain;
        let class = match record {
            Some(RecordVersion::V2) => Some(self.programs.record_v2_class),
            _ => None,
        };

        match (labels.as_slice(), record) {
            ([domain], _) => Ok(DomainKey {
                address: self.derive_address(domain, Some(&root), None)?,
                parent: None,
                is_sub: false,
                is_sub_record: false,
            }),
            ([sub, domain], _) => {
                let parent = self.derive_address(domain, Some(&root), None)?;
                let prefix = record.map_or(SUBDOMAIN_PREFIX, |v| v.prefix());
                let address =
                    self.derive_address(&format!("{prefix}{sub}"), Some(&parent), class.as_ref())?;
                Ok(DomainKey {
                    address,
                    parent: Some(parent),
                    is_sub: true,
                    is_sub_record: false,
                })
            }
            ([record_name, sub, domain], Some(version)) => {
                let parent = self.derive_address(domain, Some(&root), None)?;
                let sub_key =
                    self.derive_address(&format!("{SUBDOMAIN_PREFIX}{sub}"), Some(&parent), None)?;
                let address = self.derive_address(
                    &format!("{}{record_name}", version.prefix()),
                    Some(&sub_key),
                    class.as_ref(),
                )?;
                Ok(DomainKey {
                    address,
                    parent: Some(parent),
                    is_sub: true,
                    is_sub_record: true,
                })
            }
            (labels, _) => Err(CoreError::InvalidDomain(format!(
                "{name:?} has {} labels",
                labels.len()
            ))),
        }
    }

    /// Address of a version 1 record on `domain`.
    pub fn record_v1_address(&self, domain: &str, record: Record) -> Result<Address> {
        self.record_address(domain, record, RecordVersion::V1)
    }

    /// Address of a version 2 record on `domain`.
    pub fn record_v2_address(&self, domain: &str, record: Record) -> Result<Address> {
        self.record_address(domain, record, RecordVersion::V2)
    }

    pub fn record_address(
        &self,
        domain: &str,
        record: Record,
        version: RecordVersion,
    ) -> Result<Address> {
        let name = format!("{}.{}", record.as_str(), trim_tld(domain));
        Ok(self.name_key(&name, Some(version))?.address)
    }

    /// Address of the reverse lookup account of a domain address.
    ///
    /// The hashed label is the base58 text of `domain`, not its raw bytes.
    pub fn reverse_address(&self, domain: &Address, parent: Option<&Address>) -> Result<Address> {
        self.derive_address(
            &domain.to_base58(),
            parent,
            Some(&self.programs.reverse_lookup_class),
        )
    }

    /// Address of the NFT record of a tokenized domain.
    pub fn nft_record_address(&self, domain: &Address) -> Result<Address> {
        let (address, _) = find_program_address(
            &[b"nft_record", domain.as_bytes()],
            &self.programs.name_tokenizer,
        )?;
        Ok(address)
    }

    /// Address of the NFT mint of a tokenized domain.
    pub fn nft_mint_address(&self, domain: &Address) -> Result<Address> {
        let (address, _) = find_program_address(
            &[b"tokenized_name", domain.as_bytes()],
            &self.programs.name_tokenizer,
        )?;
        Ok(address)
    }

    /// Address of the primary domain account of a wallet.
    pub fn primary_domain_address(&self, wallet: &Address) -> Result<Address> {
        let (address, _) = find_program_address(
            &[b"favourite_domain", wallet.as_bytes()],
            &self.programs.name_offers,
        )?;
        Ok(address)
    }

    /// Associated token account of `owner` for `mint`.
    pub fn associated_token_address(&self, owner: &Address, mint: &Address) -> Result<Address> {
        let (address, _) = find_program_address(
            &[
                owner.as_bytes(),
                self.programs.token_program.as_bytes(),
                mint.as_bytes(),
            ],
            &self.programs.associated_token_program,
        )?;
        Ok(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::is_on_curve;

    fn deriver() -> AddressDeriver {
        AddressDeriver::default()
    }

    fn addr(s: &str) -> Address {
        s.parse().unwrap()
    }

    #[test]
    fn test_root_domain() {
        let key = deriver().domain_key("bonfida").unwrap();
        assert_eq!(key.address, addr("Crf8hzfthWGbGbLTVCiqRqV5MVnbpHB1L9KQMd6gsinb"));
        assert!(!key.is_sub);
        assert_eq!(key.parent, None);
    }

    #[test]
    fn test_tld_is_ignored() {
        let d = deriver();
        assert_eq!(
            d.domain_key("bonfida.sol").unwrap(),
            d.domain_key("bonfida").unwrap()
        );
    }

    #[test]
    fn test_subdomain() {
        let d = deriver();
        let key = d.domain_key("dex.bonfida").unwrap();
        assert_eq!(key.address, addr("HoFfFXqFHAC8RP3duuQNzag1ieUwJRBv1HtRNiWFq4Qu"));
        assert!(key.is_sub);
        assert_eq!(key.parent, Some(d.domain_key("bonfida").unwrap().address));
    }

    #[test]
    fn test_record_addresses() {
        let d = deriver();
        assert_eq!(
            d.record_v1_address("something", Record::Cname).unwrap(),
            addr("3RfzNCvEqEKZeohqVN16Z1oi6rw5TrANwqAo4hMx6njv")
        );
        assert_eq!(
            d.record_v2_address("something", Record::Cname).unwrap(),
            addr("6xdnfxf7URWom6oP7MMS39bFVEMMfufmFvJXFyd2xwoP")
        );
    }

    #[test]
    fn test_record_on_subdomain() {
        let d = deriver();
        let key = d.name_key("SOL.dex.bonfida", Some(RecordVersion::V2)).unwrap();
        assert!(key.is_sub_record);

        let parent = d.domain_key("bonfida").unwrap().address;
        let sub = d.domain_key("dex.bonfida").unwrap().address;
        let expected = d
            .derive_address("\x02SOL", Some(&sub), Some(&d.programs().record_v2_class))
            .unwrap();
        assert_eq!(key.address, expected);
        assert_eq!(key.parent, Some(parent));
        assert_eq!(d.record_v2_address("dex.bonfida", Record::Sol).unwrap(), expected);
    }

    #[test]
    fn test_three_labels_need_record_context() {
        let result = deriver().domain_key("a.b.c");
        assert!(matches!(result, Err(CoreError::InvalidDomain(_))));
    }

    #[test]
    fn test_four_labels_rejected() {
        let result = deriver().name_key("a.b.c.d", Some(RecordVersion::V1));
        assert!(matches!(result, Err(CoreError::InvalidDomain(_))));
    }

    #[test]
    fn test_empty_labels_rejected() {
        for name in ["", ".sol", "a..b", ".bonfida", "dex."] {
            let result = deriver().domain_key(name);
            assert!(matches!(result, Err(CoreError::InvalidInput(_))), "{name:?}");
        }
    }

    #[test]
    fn test_distinct_parents_give_distinct_addresses() {
        let d = deriver();
        let a = d.derive_address("x", Some(&Address::from_bytes([1; 32])), None).unwrap();
        let b = d.derive_address("x", Some(&Address::from_bytes([2; 32])), None).unwrap();
        let c = d.derive_address("x", None, Some(&Address::from_bytes([1; 32]))).unwrap();
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_every_pda_is_off_curve() {
        let d = deriver();
        let domain = d.domain_key("bonfida").unwrap().address;
        let wallet = Address::from_bytes([5; 32]);
        let pdas = [
            domain,
            d.reverse_address(&domain, None).unwrap(),
            d.nft_record_address(&domain).unwrap(),
            d.nft_mint_address(&domain).unwrap(),
            d.primary_domain_address(&wallet).unwrap(),
            d.associated_token_address(&wallet, &domain).unwrap(),
        ];
        for pda in pdas {
            assert!(!is_on_curve(&pda), "{pda}");
        }
    }

    #[test]
    fn test_reverse_uses_parent() {
        let d = deriver();
        let sub = d.domain_key("dex.bonfida").unwrap();
        let with_parent = d.reverse_address(&sub.address, sub.parent.as_ref()).unwrap();
        let without = d.reverse_address(&sub.address, None).unwrap();
        assert_ne!(with_parent, without);
    }

    proptest::proptest! {
        #[test]
        fn prop_domain_key_is_deterministic(label in "[a-z0-9-]{1,24}") {
            let d = deriver();
            let first = d.domain_key(&label).unwrap();
            let second = d.domain_key(&label).unwrap();
            proptest::prop_assert_eq!(first, second);
            proptest::prop_assert!(!is_on_curve(&first.address));
        }
    }
}
