//! Reverse lookups, scans, primary domains and record verification.

use sns_resolver::core::constants::GUARDIAN;
use sns_resolver::core::{RecordAccount, Validation};
use sns_resolver::fetch::MemoryFetcher;
use sns_resolver::{
    OwnedDomain, PrimaryDomain, Record, RecordVerification, ResolveError, Resolver,
    ResolverConfig, Subdomain,
};
use sns_resolver_testkit::{wallets, SnsFixture, TestWallet};

fn setup() -> (SnsFixture, Resolver<MemoryFetcher>) {
    let fixture = SnsFixture::new();
    let resolver = Resolver::from_shared(fixture.fetcher(), ResolverConfig::default());
    (fixture, resolver)
}

fn wallet(seed: u8) -> TestWallet {
    TestWallet::from_seed([seed; 32])
}

// ─────────────────────────────────────────────────────────────────────────────
// Reverse Lookup and Scans
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_reverse_lookup_of_subdomain_strips_nul() {
    let (fixture, resolver) = setup();
    let parent = fixture.register_named_domain("bonfida", &wallet(1).address());
    let sub = fixture.register_domain("dex.bonfida", &wallet(2).address());
    fixture.register_reverse(&sub, Some(&parent), "dex");

    assert_eq!(resolver.reverse_lookup(&parent, None).await.unwrap(), "bonfida");
    assert_eq!(resolver.reverse_lookup(&sub, Some(&parent)).await.unwrap(), "dex");
}

#[tokio::test]
async fn test_reverse_lookup_batch_chunks_requests() {
    let fixture = SnsFixture::new();
    let config = ResolverConfig {
        batch_size: 2,
        ..ResolverConfig::default()
    };
    let resolver = Resolver::from_shared(fixture.fetcher(), config);
    let owner = wallet(1).address();
    let names = ["alpha", "beta", "gamma", "delta", "epsilon"];
    let mut addresses: Vec<_> = names
        .iter()
        .map(|name| fixture.register_named_domain(name, &owner))
        .collect();
    addresses.insert(2, fixture.register_domain("unnamed", &owner));

    let found = resolver.reverse_lookup_batch(&addresses).await.unwrap();
    assert_eq!(
        found,
        vec![
            Some("alpha".to_string()),
            Some("beta".to_string()),
            None,
            Some("gamma".to_string()),
            Some("delta".to_string()),
            Some("epsilon".to_string()),
        ]
    );
    assert_eq!(resolver.fetcher().multiple_calls(), 3);
    assert_eq!(resolver.fetcher().largest_batch(), 2);
}

#[tokio::test]
async fn test_domains_for_address() {
    let (fixture, resolver) = setup();
    let owner = wallet(1).address();
    let bonfida = fixture.register_named_domain("bonfida", &owner);
    let solana = fixture.register_named_domain("solana", &owner);
    fixture.register_named_domain("someone-else", &wallet(2).address());
    fixture.register_domain("dex.bonfida", &owner);

    let mut domains = resolver.domains_for_address(&owner).await.unwrap();
    domains.sort_by(|a, b| a.domain.cmp(&b.domain));
    assert_eq!(
        domains,
        vec![
            OwnedDomain {
                domain: "bonfida".into(),
                domain_address: bonfida,
            },
            OwnedDomain {
                domain: "solana".into(),
                domain_address: solana,
            },
        ]
    );
}

#[tokio::test]
async fn test_subdomains() {
    let (fixture, resolver) = setup();
    let parent = fixture.register_named_domain("bonfida", &wallet(1).address());
    let dex_owner = wallet(2).address();
    let dex = fixture.register_domain("dex.bonfida", &dex_owner);
    fixture.register_reverse(&dex, Some(&parent), "dex");
    // No reverse account: not listed.
    fixture.register_domain("hidden.bonfida", &wallet(3).address());

    let subs = resolver.subdomains("bonfida").await.unwrap();
    assert_eq!(
        subs,
        vec![Subdomain {
            subdomain: "dex".into(),
            owner: dex_owner,
        }]
    );
    assert!(resolver.subdomains("dex.bonfida").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_all_domains_lists_top_level_only() {
    let (fixture, resolver) = setup();
    let owner = wallet(1).address();
    let bonfida = fixture.register_named_domain("bonfida", &owner);
    fixture.register_domain("dex.bonfida", &owner);

    let all = resolver.all_domains().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].domain_address, bonfida);
    assert_eq!(all[0].owner, owner);
}

// ─────────────────────────────────────────────────────────────────────────────
// Primary Domains
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_primary_domain() {
    let (fixture, resolver) = setup();
    let owner = wallet(1).address();
    let domain = fixture.register_named_domain("bonfida", &owner);
    fixture.set_primary(&owner, &domain);

    assert_eq!(
        resolver.primary_domain(&owner).await.unwrap(),
        PrimaryDomain {
            domain,
            reverse: "bonfida".into(),
            stale: false,
        }
    );

    // Transferred away: still reported, but stale.
    fixture.register_named_domain("bonfida", &wallet(2).address());
    assert!(resolver.primary_domain(&owner).await.unwrap().stale);
}

#[tokio::test]
async fn test_primary_subdomain_joins_parent_name() {
    let (fixture, resolver) = setup();
    let owner = wallet(1).address();
    let parent = fixture.register_named_domain("bonfida", &wallet(2).address());
    let sub = fixture.register_domain("dex.bonfida", &owner);
    fixture.register_reverse(&sub, Some(&parent), "dex");
    fixture.set_primary(&owner, &sub);

    let primary = resolver.primary_domain(&owner).await.unwrap();
    assert_eq!(primary.reverse, "dex.bonfida");
    assert!(!primary.stale);
}

#[tokio::test]
async fn test_primary_domain_of_tokenized_domain() {
    let (fixture, resolver) = setup();
    let holder = wallet(1).address();
    let domain = fixture.register_named_domain("bonfida", &wallet(7).address());
    fixture.tokenize(&domain, &holder);
    fixture.set_primary(&holder, &domain);

    assert!(!resolver.primary_domain(&holder).await.unwrap().stale);
}

#[tokio::test]
async fn test_primary_domain_missing() {
    let (_fixture, resolver) = setup();
    let result = resolver.primary_domain(&wallet(1).address()).await;
    assert!(matches!(result, Err(ResolveError::AccountDoesNotExist(_))));
}

#[tokio::test]
async fn test_primary_domains_batch() {
    let (fixture, resolver) = setup();
    let parties = wallets(5);
    let [fresh, absent, stale, holder, sub_owner] = [0, 1, 2, 3, 4].map(|i| parties[i].address());

    let bonfida = fixture.register_named_domain("bonfida", &fresh);
    fixture.set_primary(&fresh, &bonfida);

    let sold = fixture.register_named_domain("sold", &wallet(9).address());
    fixture.set_primary(&stale, &sold);

    let tokenized = fixture.register_named_domain("tokenized", &wallet(9).address());
    fixture.tokenize(&tokenized, &holder);
    fixture.set_primary(&holder, &tokenized);

    let dex = fixture.register_domain("dex.bonfida", &sub_owner);
    fixture.register_reverse(&dex, Some(&bonfida), "dex");
    fixture.set_primary(&sub_owner, &dex);

    let names = resolver
        .primary_domains_batch(&[fresh, absent, stale, holder, sub_owner])
        .await
        .unwrap();
    assert_eq!(
        names,
        vec![
            Some("bonfida".to_string()),
            None,
            None,
            Some("tokenized".to_string()),
            Some("dex.bonfida".to_string()),
        ]
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Records
// ─────────────────────────────────────────────────────────────────────────────

fn sol_record(owner: &TestWallet, target: &TestWallet) -> RecordAccount {
    RecordAccount::new(
        Validation::Solana,
        owner.address().as_bytes(),
        Validation::Solana,
        target.address().as_bytes(),
        target.address().as_bytes(),
    )
}

#[tokio::test]
async fn test_domain_record_with_default_verifiers() {
    let (fixture, resolver) = setup();
    let owner = wallet(1);
    fixture.register_domain("bonfida", &owner.address());
    fixture.write_record_v2("bonfida", Record::Sol, &sol_record(&owner, &wallet(2)));
    let url = RecordAccount::new(
        Validation::Solana,
        owner.address().as_bytes(),
        Validation::Solana,
        GUARDIAN.as_bytes(),
        b"https://sns.id",
    );
    fixture.write_record_v2("bonfida", Record::Url, &url);

    let sol = resolver
        .domain_record("bonfida", Record::Sol, None)
        .await
        .unwrap();
    assert_eq!(
        sol.verification,
        RecordVerification {
            staleness: true,
            roa: Some(true),
        }
    );

    let url = resolver
        .domain_record("bonfida", Record::Url, None)
        .await
        .unwrap();
    assert_eq!(url.verification.roa, Some(true));
    assert_eq!(url.account.content().unwrap(), b"https://sns.id");
}

#[tokio::test]
async fn test_record_staleness_follows_owner() {
    let (fixture, resolver) = setup();
    let owner = wallet(1);
    fixture.register_domain("bonfida", &owner.address());
    fixture.write_record_v2("bonfida", Record::Sol, &sol_record(&owner, &wallet(2)));

    assert!(resolver
        .verify_record_staleness("bonfida", Record::Sol)
        .await
        .unwrap());

    fixture.register_domain("bonfida", &wallet(3).address());
    assert!(!resolver
        .verify_record_staleness("bonfida", Record::Sol)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_record_roa_needs_a_verifier() {
    let (fixture, resolver) = setup();
    let owner = wallet(1);
    fixture.register_domain("bonfida", &owner.address());
    let ipfs = RecordAccount::new(
        Validation::Solana,
        owner.address().as_bytes(),
        Validation::Solana,
        owner.address().as_bytes(),
        b"ipfs://bafy",
    );
    fixture.write_record_v2("bonfida", Record::Ipfs, &ipfs);

    let missing = resolver.verify_record_roa("bonfida", Record::Ipfs, None).await;
    assert!(matches!(missing, Err(ResolveError::MissingVerifier(_))));

    let verified = resolver
        .verify_record_roa("bonfida", Record::Ipfs, Some(owner.address().as_bytes()))
        .await;
    assert_eq!(verified, Ok(true));

    let wrong = resolver
        .verify_record_roa("bonfida", Record::Ipfs, Some(GUARDIAN.as_bytes()))
        .await;
    assert_eq!(wrong, Ok(false));
}

#[tokio::test]
async fn test_domain_record_missing_account() {
    let (fixture, resolver) = setup();
    fixture.register_domain("bonfida", &wallet(1).address());
    let result = resolver.domain_record("bonfida", Record::Twitter, None).await;
    assert!(matches!(result, Err(ResolveError::AccountDoesNotExist(_))));
}

#[tokio::test]
async fn test_domain_records_batch() {
    let (fixture, resolver) = setup();
    let owner = wallet(1);
    fixture.register_domain("bonfida", &owner.address());
    fixture.write_record_v2("bonfida", Record::Sol, &sol_record(&owner, &wallet(2)));

    let records = resolver
        .domain_records("bonfida", &[Record::Sol, Record::Email], None)
        .await
        .unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].as_ref().map(|r| r.record), Some(Record::Sol));
    assert!(records[1].is_none());

    let mismatched = resolver
        .domain_records("bonfida", &[Record::Sol, Record::Email], Some(&[None]))
        .await;
    assert!(matches!(mismatched, Err(ResolveError::MissingVerifier(_))));
}

#[tokio::test]
async fn test_domain_records_batch_skips_malformed_record() {
    let (fixture, resolver) = setup();
    let owner = wallet(1);
    fixture.register_domain("bonfida", &owner.address());
    fixture.write_record_v2("bonfida", Record::Sol, &sol_record(&owner, &wallet(2)));
    // Solana ids need 64 body bytes; this body has 10.
    let truncated =
        RecordAccount::new(Validation::Solana, &[1; 5], Validation::Solana, &[2; 5], &[]);
    fixture.write_record_v2("bonfida", Record::Email, &truncated);

    let records = resolver
        .domain_records("bonfida", &[Record::Sol, Record::Email], None)
        .await
        .unwrap();
    assert_eq!(records.len(), 2);
    let sol = records[0].as_ref().unwrap();
    assert_eq!(sol.record, Record::Sol);
    assert!(sol.verification.staleness);
    assert!(records[1].is_none());

    let single = resolver.domain_record("bonfida", Record::Email, None).await;
    assert!(matches!(single, Err(ResolveError::RecordMalformed(_))));
}
