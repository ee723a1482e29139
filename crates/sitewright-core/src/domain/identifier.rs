//! Site identifier derivation rules.
//!
//! # Design Rationale
//!
//! One domain name maps to exactly one short identifier, and that identifier
//! is reused verbatim as the system account name, the database name, and the
//! database user name. Bare domains and `www.`-prefixed domains collapse to
//! the same identifier so the canonical site provisions under a single
//! account; any other subdomain (`staging.example.com`) gets a clearly-named
//! sibling (`example-staging`) so multiple environments for one registrable
//! domain never collide on the account/database namespace.
//!
//! All derivation rules live in this module. `DomainName` stays a plain
//! value object; nothing else in the crate re-implements label arithmetic.
//!
//! # Known limitation
//!
//! [`COMPOUND_SUFFIX_MARKERS`] is a fixed heuristic, not a public-suffix
//! list. Domains under multi-label suffixes whose second level is not in the
//! marker set (`.ac.jp`, `.gov.br`) are classified as if the suffix were a
//! single label. This matches the deployed behavior and is preserved
//! deliberately; swapping in a full public-suffix list is a product
//! decision, not a bug fix.

use crate::domain::value_objects::DomainName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Second-level labels that mark a compound public suffix.
///
/// When a domain of three or more labels has one of these directly before
/// its top-level domain (`example.co.uk`, `shop.example.com.au`), the
/// registrable name sits one label deeper than in the standard
/// `example.com` case.
pub static COMPOUND_SUFFIX_MARKERS: &[&str] = &["co", "com", "org", "net", "gov", "edu"];

/// The canonical short identifier derived from a domain name.
///
/// Used downstream as operating-system account name, database name, and
/// database user name. Derivation is pure and deterministic: the same
/// `DomainName` always yields the same identifier, and because `DomainName`
/// is lowercase-folded at construction the identifier alphabet is
/// `[a-z0-9-]` for any input that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SiteIdentifier(String);

impl SiteIdentifier {
    /// Derive the identifier for a validated domain name.
    ///
    /// Algorithm, left-to-right labels `l[0..n]`:
    /// 1. `subdomain` = `l[0]`.
    /// 2. `main` = `l[n-3]` when `n >= 3` and `l[n-2]` is a
    ///    [compound-suffix marker](COMPOUND_SUFFIX_MARKERS); otherwise
    ///    `l[n-2]`.
    /// 3. The identifier is `main` when `subdomain` is `www` or equals
    ///    `main`; otherwise `main + "-" + subdomain`.
    ///
    /// Total on validated input; this function never fails.
    pub fn derive(domain: &DomainName) -> Self {
        let labels: Vec<&str> = domain.labels().collect();
        let n = labels.len();

        let subdomain = labels[0];
        let main = if n >= 3 && COMPOUND_SUFFIX_MARKERS.contains(&labels[n - 2]) {
            labels[n - 3]
        } else {
            labels[n - 2]
        };

        let identifier = if subdomain == "www" || subdomain == main {
            main.to_string()
        } else {
            format!("{main}-{subdomain}")
        };

        Self(identifier)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SiteIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SiteIdentifier> for String {
    fn from(value: SiteIdentifier) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(input: &str) -> String {
        let domain = DomainName::parse(input).unwrap();
        SiteIdentifier::derive(&domain).0
    }

    #[test]
    fn bare_domain_uses_main_label() {
        assert_eq!(derive("example.com"), "example");
    }

    #[test]
    fn www_collapses_to_main_label() {
        assert_eq!(derive("www.example.com"), "example");
    }

    #[test]
    fn subdomain_gets_suffixed_identifier() {
        assert_eq!(derive("staging.example.com"), "example-staging");
    }

    #[test]
    fn compound_suffix_shifts_main_label() {
        assert_eq!(derive("staging.example.co.uk"), "example-staging");
        assert_eq!(derive("www.example.com.au"), "example");
    }

    #[test]
    fn two_label_equivalent_under_compound_suffix() {
        // example.co.za: labels [example, co, za], n = 3, second-to-last
        // is "co" (marker), so main = labels[0] = "example"; the subdomain
        // is also labels[0], so subdomain == main and the identifier is
        // plain "example".
        assert_eq!(derive("example.co.za"), "example");
    }

    #[test]
    fn marker_does_not_misfire_on_standard_three_label_domain() {
        // mail.example.com: second-to-last label is "example" — not a
        // marker — so the standard branch applies.
        assert_eq!(derive("mail.example.com"), "example-mail");
    }

    #[test]
    fn derivation_is_deterministic() {
        let domain = DomainName::parse("staging.example.co.uk").unwrap();
        assert_eq!(
            SiteIdentifier::derive(&domain),
            SiteIdentifier::derive(&domain)
        );
    }

    #[test]
    fn mixed_case_input_folds_before_derivation() {
        assert_eq!(derive("WWW.Example.COM"), "example");
        assert_eq!(derive("Staging.Example.Co.UK"), "example-staging");
    }

    #[test]
    fn identifier_alphabet_is_account_safe() {
        for input in &[
            "example.com",
            "www.example.com",
            "staging.example.co.uk",
            "my-app.example.net",
            "a1.b2.co.uk",
        ] {
            let id = derive(input);
            assert!(
                id.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "unsafe identifier {id:?} for {input}"
            );
        }
    }

    #[test]
    fn marker_table_matches_deployed_set() {
        assert_eq!(
            COMPOUND_SUFFIX_MARKERS,
            &["co", "com", "org", "net", "gov", "edu"]
        );
    }

    // Table of the full contract, in one place.
    #[test]
    fn derivation_table() {
        for (input, expected) in [
            ("example.com", "example"),
            ("www.example.com", "example"),
            ("staging.example.com", "example-staging"),
            ("staging.example.co.uk", "example-staging"),
            ("example.co.za", "example"),
            ("mail.example.com", "example-mail"),
            ("example.example.com", "example"),
            ("shop.example.com.au", "example-shop"),
            ("www.example.gov", "example"),
        ] {
            assert_eq!(derive(input), expected, "input: {input}");
        }
    }
}
