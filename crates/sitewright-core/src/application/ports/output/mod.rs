//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `sitewright-adapters` crate provides implementations.

use std::net::IpAddr;
use std::path::PathBuf;

use crate::domain::{DomainName, PhpVersion, SiteCredentials, VhostTemplate};
use crate::error::CoreResult;

#[cfg(test)]
use mockall::automock;

/// Length of every generated password.
pub const PASSWORD_LENGTH: usize = 24;

/// What the control plane needs to create a site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSpec {
    pub domain: DomainName,
    pub php_version: PhpVersion,
    pub vhost_template: VhostTemplate,
    pub site_user: String,
    pub site_user_password: String,
}

/// What the control plane needs to create a database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSpec {
    pub domain: DomainName,
    pub database_name: String,
    pub database_user_name: String,
    pub database_user_password: String,
}

/// Result of a certificate issuance attempt.
///
/// Rate limiting is an expected, recoverable answer from the certificate
/// authority — the site stays up without TLS and issuance can be retried
/// later — so it is a value here rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificateOutcome {
    Issued,
    RateLimited,
}

/// Port for the external control plane (CloudPanel's `clpctl`).
///
/// Implemented by:
/// - `sitewright_adapters::control_plane::ClpctlControlPlane` (production)
/// - `sitewright_adapters::control_plane::MemoryControlPlane` (testing)
///
/// ## Design Notes
///
/// Failures carry the collaborator's trimmed output verbatim. Output
/// classification (exit status, error markers, rate-limit markers) is the
/// adapter's job; nothing behind this trait boundary inspects collaborator
/// text.
#[cfg_attr(test, automock)]
pub trait ControlPlane: Send + Sync {
    /// Create a PHP site for the domain.
    fn create_site(&self, spec: &SiteSpec) -> CoreResult<()>;

    /// Create the site's database.
    fn create_database(&self, spec: &DatabaseSpec) -> CoreResult<()>;

    /// Request TLS certificate issuance for the domain.
    fn issue_certificate(&self, domain: &DomainName) -> CoreResult<CertificateOutcome>;

    /// Delete a previously created site.
    fn delete_site(&self, domain: &DomainName, force: bool) -> CoreResult<()>;
}

/// Port for single-shot DNS lookups.
///
/// Implemented by:
/// - `sitewright_adapters::dns::DigResolver` (production)
/// - `sitewright_adapters::dns::StaticResolver` (testing)
///
/// Zero answers is a valid result, not an error — the caller decides what
/// an unresolved domain means. No recursion, no caching, no retries.
#[cfg_attr(test, automock)]
pub trait DnsResolver: Send + Sync {
    fn resolve(&self, domain: &DomainName) -> CoreResult<Vec<IpAddr>>;
}

/// Port for password generation.
///
/// Implemented by:
/// - `sitewright_adapters::secrets::RandSecretGenerator` (production)
/// - `sitewright_adapters::secrets::FixedSecretGenerator` (testing)
#[cfg_attr(test, automock)]
pub trait SecretGenerator: Send + Sync {
    /// Produce an alphanumeric secret of `len` characters.
    fn generate(&self, len: usize) -> String;
}

/// Port for emitting the credentials file.
///
/// Implemented by:
/// - `sitewright_adapters::credentials::HomeCredentialsStore` (production)
/// - `sitewright_adapters::credentials::MemoryCredentialsStore` (testing)
///
/// Contract: the file lands at `/home/{site_user}/site_credentials.txt`,
/// owned by the site user, mode 0600. Returns the written path.
#[cfg_attr(test, automock)]
pub trait CredentialsStore: Send + Sync {
    fn write(&self, credentials: &SiteCredentials) -> CoreResult<PathBuf>;
}

/// Port for discovering installed PHP runtimes.
///
/// Implemented by:
/// - `sitewright_adapters::runtime_catalog::DirRuntimeCatalog` (production)
/// - `sitewright_adapters::runtime_catalog::StaticRuntimeCatalog` (testing)
#[cfg_attr(test, automock)]
pub trait RuntimeCatalog: Send + Sync {
    /// Installed PHP versions, newest first. May legitimately be empty.
    fn installed_php_versions(&self) -> CoreResult<Vec<PhpVersion>>;
}
