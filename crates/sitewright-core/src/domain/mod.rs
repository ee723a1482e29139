// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Sitewright.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O — the control-plane CLI, DNS lookups, secret generation, the
//! filesystem — is handled via ports (traits) defined in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable values**: All domain objects are Clone + PartialEq
//! - **Rich domain model**: Behavior lives with the types, not in services
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod identifier;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    CREDENTIALS_FILE_NAME, InstallRequest, InstallRequestBuilder, ServerAddresses, SiteCredentials,
};

pub use error::{DomainError, ErrorCategory};

pub use identifier::{COMPOUND_SUFFIX_MARKERS, SiteIdentifier};

pub use value_objects::{DomainName, PhpVersion, VhostTemplate};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Cross-module invariants
    // ========================================================================

    #[test]
    fn validator_and_parse_agree() {
        assert_eq!(
            DomainValidator::validate_domain("Example.COM").unwrap(),
            DomainName::parse("example.com").unwrap()
        );
        assert!(DomainValidator::validate_domain("not a domain").is_err());
    }

    #[test]
    fn request_reuses_identifier_for_database_identity() {
        let request = InstallRequest::builder()
            .domain(DomainName::parse("staging.example.co.uk").unwrap())
            .php_version(PhpVersion::new(8, 3))
            .vhost_template(VhostTemplate::new("Generic").unwrap())
            .site_user_password("aaaaaaaaaaaaaaaaaaaaaaaa")
            .database_password("bbbbbbbbbbbbbbbbbbbbbbbb")
            .build()
            .unwrap();

        let credentials = SiteCredentials::from(&request);
        assert_eq!(credentials.site_user.as_str(), "example-staging");
        assert_eq!(credentials.database_name, credentials.site_user);
        assert_eq!(credentials.database_user, credentials.site_user);
        assert_eq!(
            credentials.path_under("/home").to_str().unwrap(),
            "/home/example-staging/site_credentials.txt"
        );
    }

    #[test]
    fn identifier_never_escapes_domain_alphabet() {
        // Every character class validation admits maps into [a-z0-9-] after
        // the lowercase fold, so derived identifiers are always safe as
        // account and database names.
        for input in &["A-1.B-2.co.uk", "x9.example.com", "www.a-b-c.net"] {
            let domain = DomainName::parse(input).unwrap();
            let id = SiteIdentifier::derive(&domain);
            assert!(
                id.as_str()
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            );
        }
    }
}
