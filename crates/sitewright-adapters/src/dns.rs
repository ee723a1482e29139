//! DNS lookup adapters.
//!
//! The check only needs "which addresses does this name point at right
//! now", so the production adapter shells out to `dig +short` the same way
//! the control-plane adapter shells out to `clpctl` — a single-shot query
//! with no recursion, caching, or retries of its own.

use std::net::IpAddr;
use std::process::Command;

use tracing::debug;

use sitewright_core::{
    application::{ApplicationError, ports::DnsResolver},
    domain::DomainName,
    error::{CoreError, CoreResult},
};

/// Production resolver shelling out to `dig`.
#[derive(Debug, Clone)]
pub struct DigResolver {
    binary: String,
}

impl DigResolver {
    pub fn new() -> Self {
        Self {
            binary: "dig".into(),
        }
    }

    fn query(&self, domain: &DomainName, record: &str) -> CoreResult<Vec<IpAddr>> {
        let output = Command::new(&self.binary)
            .args(["+short", domain.as_str(), record])
            .output()
            .map_err(|e| {
                CoreError::Application(ApplicationError::DnsLookupFailed {
                    domain: domain.to_string(),
                    reason: format!("failed to invoke {}: {}", self.binary, e),
                })
            })?;

        // `dig` exits non-zero on resolver trouble; an empty answer section
        // on exit 0 simply means the name has no records of this type.
        if !output.status.success() {
            return Err(ApplicationError::DnsLookupFailed {
                domain: domain.to_string(),
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        // CNAME chains show up as intermediate non-address lines; keep only
        // the lines that parse as addresses.
        let addrs = String::from_utf8_lossy(&output.stdout)
            .lines()
            .filter_map(|line| line.trim().parse::<IpAddr>().ok())
            .collect();
        Ok(addrs)
    }
}

impl Default for DigResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl DnsResolver for DigResolver {
    fn resolve(&self, domain: &DomainName) -> CoreResult<Vec<IpAddr>> {
        let mut addrs = self.query(domain, "A")?;
        addrs.extend(self.query(domain, "AAAA")?);
        debug!(domain = %domain, ?addrs, "dns lookup");
        Ok(addrs)
    }
}

/// Fixed-answer resolver for testing.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    answers: Vec<IpAddr>,
}

impl StaticResolver {
    pub fn new(answers: Vec<IpAddr>) -> Self {
        Self { answers }
    }

    /// A resolver that answers with nothing, for the unresolved-domain path.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl DnsResolver for StaticResolver {
    fn resolve(&self, _domain: &DomainName) -> CoreResult<Vec<IpAddr>> {
        Ok(self.answers.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_resolver_returns_configured_answers() {
        let resolver = StaticResolver::new(vec!["203.0.113.10".parse().unwrap()]);
        let addrs = resolver
            .resolve(&DomainName::parse("example.com").unwrap())
            .unwrap();
        assert_eq!(addrs, vec!["203.0.113.10".parse::<IpAddr>().unwrap()]);
    }

    #[test]
    fn empty_resolver_answers_nothing() {
        let resolver = StaticResolver::empty();
        assert!(
            resolver
                .resolve(&DomainName::parse("example.com").unwrap())
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn missing_binary_reports_lookup_failure() {
        let resolver = DigResolver {
            binary: "/nonexistent/dig".into(),
        };
        let err = resolver
            .resolve(&DomainName::parse("example.com").unwrap())
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Application(ApplicationError::DnsLookupFailed { .. })
        ));
    }
}
