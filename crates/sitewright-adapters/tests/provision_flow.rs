//! End-to-end provisioning flow over the in-memory adapters.
//!
//! Exercises the same wiring the CLI performs, minus the real `clpctl`
//! binary: service orchestration, identifier reuse across site and
//! database, certificate outcome propagation, and credentials emission.

use sitewright_adapters::{
    FixedSecretGenerator, MemoryControlPlane, MemoryCredentialsStore, StaticResolver,
    StaticRuntimeCatalog,
};
use sitewright_core::{
    application::{
        ProvisionService,
        ports::{CertificateOutcome, DnsResolver, PASSWORD_LENGTH},
    },
    domain::{DomainName, PhpVersion, VhostTemplate},
};

fn service_over(
    plane: MemoryControlPlane,
    store: MemoryCredentialsStore,
) -> ProvisionService {
    ProvisionService::new(
        Box::new(plane),
        Box::new(FixedSecretGenerator::new('s')),
        Box::new(store),
        Box::new(StaticRuntimeCatalog::new(vec![
            PhpVersion::new(8, 3),
            PhpVersion::new(8, 2),
        ])),
    )
}

#[test]
fn full_run_creates_site_database_certificate_and_credentials() {
    let plane = MemoryControlPlane::new();
    let store = MemoryCredentialsStore::new();
    let service = service_over(plane.clone(), store.clone());

    let outcome = service
        .provision(
            DomainName::parse("staging.example.co.uk").unwrap(),
            PhpVersion::new(8, 3),
            VhostTemplate::new("Generic").unwrap(),
        )
        .unwrap();

    // Site and database share the derived identifier.
    let sites = plane.created_sites();
    assert_eq!(sites.len(), 1);
    assert_eq!(sites[0].site_user, "example-staging");
    assert_eq!(sites[0].site_user_password.len(), PASSWORD_LENGTH);

    let databases = plane.created_databases();
    assert_eq!(databases.len(), 1);
    assert_eq!(databases[0].database_name, "example-staging");
    assert_eq!(databases[0].database_user_name, "example-staging");

    // One certificate request, for the site's domain.
    assert_eq!(
        plane.certificate_requests(),
        vec![DomainName::parse("staging.example.co.uk").unwrap()]
    );
    assert_eq!(outcome.certificate, CertificateOutcome::Issued);

    // Credentials landed at the canonical path and carry the secrets.
    let body = store.read_file(&outcome.credentials_path).unwrap();
    assert!(outcome
        .credentials_path
        .ends_with("example-staging/site_credentials.txt"));
    assert!(body.contains("staging.example.co.uk"));
    assert!(body.contains(&"s".repeat(PASSWORD_LENGTH)));
}

#[test]
fn database_failure_leaves_no_certificate_or_credentials() {
    let plane = MemoryControlPlane::new().fail_database_with("duplicate database");
    let store = MemoryCredentialsStore::new();
    let service = service_over(plane.clone(), store.clone());

    let result = service.provision(
        DomainName::parse("example.com").unwrap(),
        PhpVersion::new(8, 2),
        VhostTemplate::new("WordPress").unwrap(),
    );

    assert!(result.is_err());
    assert_eq!(plane.created_sites().len(), 1);
    assert!(plane.certificate_requests().is_empty());
    assert!(store.written_paths().is_empty());
}

#[test]
fn rate_limited_run_still_hands_over_credentials() {
    let plane =
        MemoryControlPlane::new().with_certificate_outcome(CertificateOutcome::RateLimited);
    let store = MemoryCredentialsStore::new();
    let service = service_over(plane.clone(), store.clone());

    let outcome = service
        .provision(
            DomainName::parse("www.example.com").unwrap(),
            PhpVersion::new(8, 3),
            VhostTemplate::new("Generic").unwrap(),
        )
        .unwrap();

    assert_eq!(outcome.certificate, CertificateOutcome::RateLimited);
    assert_eq!(store.written_paths().len(), 1);
}

#[test]
fn delete_records_force_flag() {
    let plane = MemoryControlPlane::new();
    let service = service_over(plane.clone(), MemoryCredentialsStore::new());

    let domain = DomainName::parse("example.com").unwrap();
    service.delete(&domain, true).unwrap();

    assert_eq!(plane.deletions(), vec![(domain, true)]);
}

#[test]
fn static_resolver_supports_dns_preflight_shapes() {
    // The CLI compares lookup answers against the server's addresses; the
    // resolver itself only promises zero or more parsed addresses.
    let domain = DomainName::parse("example.com").unwrap();

    let hit = StaticResolver::new(vec!["203.0.113.10".parse().unwrap()]);
    assert_eq!(hit.resolve(&domain).unwrap().len(), 1);

    let miss = StaticResolver::empty();
    assert!(miss.resolve(&domain).unwrap().is_empty());
}
