//! Test fixtures and helpers.
//!
//! [`SnsFixture`] writes name service accounts into a [`MemoryFetcher`]
//! laid out exactly as the chain stores them, so a resolver reading from the
//! same fetcher sees a realistic deployment.

use std::sync::Arc;

use ed25519_dalek::{Signer, SigningKey};
use rand::rngs::OsRng;
use sns_resolver_core::crypto::find_program_address;
use sns_resolver_core::{
    encode_reverse, Address, AddressDeriver, NftAccount, NftTag, PrimaryDomainAccount,
    ProgramAddresses, Record, RecordAccount, RegistryAccount, TokenAccount, Validation,
};
use sns_resolver_fetch::{MemoryFetcher, TokenHolding};

/// An Ed25519 wallet.
pub struct TestWallet {
    key: SigningKey,
}

impl TestWallet {
    /// Create a wallet with a random key.
    pub fn new() -> Self {
        Self {
            key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Create with a deterministic key from seed.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            key: SigningKey::from_bytes(&seed),
        }
    }

    pub fn address(&self) -> Address {
        Address::from_bytes(self.key.verifying_key().to_bytes())
    }

    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        self.key.sign(message).to_bytes()
    }
}

impl std::fmt::Debug for TestWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TestWallet({})", self.address())
    }
}

impl Default for TestWallet {
    fn default() -> Self {
        Self::new()
    }
}

/// Create multiple wallets with distinct deterministic keys.
pub fn wallets(count: usize) -> Vec<TestWallet> {
    (0..count)
        .map(|i| {
            let mut seed = [0x5a; 32];
            let index = i.to_le_bytes();
            seed[..index.len()].copy_from_slice(&index);
            TestWallet::from_seed(seed)
        })
        .collect()
}

/// Chain state for one deployment, backed by a shared memory fetcher.
pub struct SnsFixture {
    fetcher: Arc<MemoryFetcher>,
    deriver: AddressDeriver,
}

impl SnsFixture {
    /// Create an empty mainnet deployment.
    pub fn new() -> Self {
        Self::with_programs(ProgramAddresses::MAINNET)
    }

    pub fn with_programs(programs: ProgramAddresses) -> Self {
        Self {
            fetcher: Arc::new(MemoryFetcher::new()),
            deriver: AddressDeriver::new(programs),
        }
    }

    /// The fetcher, for building a resolver over this state.
    pub fn fetcher(&self) -> Arc<MemoryFetcher> {
        Arc::clone(&self.fetcher)
    }

    pub fn deriver(&self) -> &AddressDeriver {
        &self.deriver
    }

    pub fn programs(&self) -> &ProgramAddresses {
        self.deriver.programs()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Registries
    // ─────────────────────────────────────────────────────────────────────────

    /// Register a domain or subdomain owned by `owner`; returns its address.
    pub fn register_domain(&self, domain: &str, owner: &Address) -> Address {
        self.register_domain_with_data(domain, owner, Vec::new())
    }

    /// Register a domain with trailing registry data.
    pub fn register_domain_with_data(
        &self,
        domain: &str,
        owner: &Address,
        data: Vec<u8>,
    ) -> Address {
        let key = self.derived(self.deriver.domain_key(domain));
        let parent = key.parent.unwrap_or(self.programs().root_domain);
        let registry = RegistryAccount::new(parent, *owner, Address::ZERO, data);
        self.insert_name_account(key.address, &registry);
        key.address
    }

    /// Write the reverse account of `domain_address`.
    ///
    /// For a subdomain pass its parent; the label is stored with a leading
    /// `\0` as the name program does.
    pub fn register_reverse(
        &self,
        domain_address: &Address,
        parent: Option<&Address>,
        name: &str,
    ) -> Address {
        let reverse = self.derived(self.deriver.reverse_address(domain_address, parent));
        let stored = match parent {
            Some(_) => format!("\0{name}"),
            None => name.to_string(),
        };
        let registry = RegistryAccount::new(
            parent.copied().unwrap_or(Address::ZERO),
            Address::ZERO,
            self.programs().reverse_lookup_class,
            self.derived(encode_reverse(&stored)),
        );
        self.insert_name_account(reverse, &registry);
        reverse
    }

    /// Register a top-level domain together with its reverse account.
    pub fn register_named_domain(&self, domain: &str, owner: &Address) -> Address {
        let address = self.register_domain(domain, owner);
        self.register_reverse(&address, None, domain);
        address
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Tokenization
    // ─────────────────────────────────────────────────────────────────────────

    /// Tokenize a domain and give its NFT to `holder`; returns the mint.
    pub fn tokenize(&self, domain_address: &Address, holder: &Address) -> Address {
        let mint = self.write_nft_record(domain_address, NftTag::ActiveRecord);
        self.give_nft(&mint, holder);
        mint
    }

    /// Write the NFT record of a domain with the given tag; returns the mint.
    pub fn write_nft_record(&self, domain_address: &Address, tag: NftTag) -> Address {
        let record_address = self.derived(self.deriver.nft_record_address(domain_address));
        let mint = self.derived(self.deriver.nft_mint_address(domain_address));
        let nft = NftAccount {
            tag,
            nonce: 255,
            name_account: *domain_address,
            owner: Address::ZERO,
            mint,
        };
        let tokenizer = self.programs().name_tokenizer;
        self.fetcher.insert(record_address, tokenizer, nft.encode().to_vec());
        mint
    }

    /// Move the single token of `mint` into `holder`'s associated account.
    pub fn give_nft(&self, mint: &Address, holder: &Address) -> Address {
        let token_address = self.derived(self.deriver.associated_token_address(holder, mint));
        let token = TokenAccount {
            mint: *mint,
            owner: *holder,
            amount: 1,
        };
        let token_program = self.programs().token_program;
        self.fetcher.insert(token_address, token_program, token.encode());
        self.fetcher.set_holders(
            *mint,
            vec![TokenHolding {
                address: token_address,
                amount: 1,
            }],
        );
        token_address
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Records
    // ─────────────────────────────────────────────────────────────────────────

    /// Write a version 1 SOL record pointing at `target`, signed by `signer`.
    pub fn write_sol_record_v1(
        &self,
        domain: &str,
        target: &Address,
        signer: &TestWallet,
    ) -> Address {
        let address = self.derived(self.deriver.record_v1_address(domain, Record::Sol));
        let mut message = Vec::with_capacity(64);
        message.extend_from_slice(target.as_bytes());
        message.extend_from_slice(address.as_bytes());
        let signature = signer.sign(hex::encode(message).as_bytes());

        let mut data = target.as_bytes().to_vec();
        data.extend_from_slice(&signature);
        self.write_record_account(domain, address, Address::ZERO, data);
        address
    }

    /// Write a version 2 record account.
    pub fn write_record_v2(
        &self,
        domain: &str,
        record: Record,
        account: &RecordAccount,
    ) -> Address {
        let address = self.derived(self.deriver.record_v2_address(domain, record));
        let class = self.programs().record_v2_class;
        self.write_record_account(domain, address, class, account.encode());
        address
    }

    /// Write a version 2 SOL record with Solana staleness and RoA proofs.
    pub fn write_sol_record_v2(
        &self,
        domain: &str,
        staleness: &Address,
        roa: &Address,
        content: &Address,
    ) -> Address {
        let record = RecordAccount::new(
            Validation::Solana,
            staleness.as_bytes(),
            Validation::Solana,
            roa.as_bytes(),
            content.as_bytes(),
        );
        self.write_record_v2(domain, Record::Sol, &record)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Primary Domains
    // ─────────────────────────────────────────────────────────────────────────

    /// Set `domain_address` as the primary domain of `wallet`.
    pub fn set_primary(&self, wallet: &Address, domain_address: &Address) -> Address {
        let address = self.derived(self.deriver.primary_domain_address(wallet));
        let primary = PrimaryDomainAccount {
            tag: 1,
            name_account: *domain_address,
        };
        let offers = self.programs().name_offers;
        self.fetcher.insert(address, offers, primary.encode().to_vec());
        address
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Raw Accounts
    // ─────────────────────────────────────────────────────────────────────────

    /// A program-derived address with an account owned by `program`.
    pub fn program_owned_account(&self, seed: &[u8], program: &Address) -> Address {
        let (address, _) = self.derived(find_program_address(&[seed], program));
        self.fetcher.insert(address, *program, vec![0u8; 8]);
        address
    }

    pub fn insert_account(&self, address: Address, program: Address, data: Vec<u8>) {
        self.fetcher.insert(address, program, data);
    }

    fn insert_name_account(&self, address: Address, registry: &RegistryAccount) {
        let name_program = self.programs().name_program;
        self.fetcher.insert(address, name_program, registry.encode());
    }

    fn write_record_account(&self, domain: &str, address: Address, class: Address, data: Vec<u8>) {
        let key = self.derived(self.deriver.domain_key(domain));
        let registry = RegistryAccount::new(key.address, Address::ZERO, class, data);
        self.insert_name_account(address, &registry);
    }

    fn derived<T>(&self, result: sns_resolver_core::Result<T>) -> T {
        result.unwrap_or_else(|e| panic!("fixture derivation failed: {e}"))
    }
}

impl Default for SnsFixture {
    fn default() -> Self {
        Self::new()
    }
}
