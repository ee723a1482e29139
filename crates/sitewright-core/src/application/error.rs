//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the external
//! collaborators behind the ports, not business logic. Business logic errors
//! are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
///
/// Collaborator failures carry the collaborator's trimmed output so the
/// operator sees what the external tool actually said. There is no retry
/// machinery anywhere: every failure propagates on first occurrence, and
/// the only loop in the system is the interactive re-prompt at the CLI.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The control-plane binary could not be invoked at all.
    #[error("control plane unavailable ({binary}): {reason}")]
    ControlPlaneUnavailable { binary: String, reason: String },

    /// `site:add:php` failed.
    #[error("site creation failed for {domain}: {output}")]
    SiteCreationFailed { domain: String, output: String },

    /// `db:add` failed.
    #[error("database creation failed for {domain}: {output}")]
    DatabaseCreationFailed { domain: String, output: String },

    /// Certificate issuance failed for a reason other than rate limiting.
    ///
    /// Rate limiting is not an error — it comes back through
    /// `CertificateOutcome::RateLimited` so the caller can warn and keep the
    /// freshly created site.
    #[error("certificate installation failed for {domain}: {output}")]
    CertificateInstallFailed { domain: String, output: String },

    /// `site:delete` failed.
    #[error("site deletion failed for {domain}: {output}")]
    SiteDeletionFailed { domain: String, output: String },

    /// The DNS lookup utility failed or is missing.
    #[error("DNS lookup failed for {domain}: {reason}")]
    DnsLookupFailed { domain: String, reason: String },

    /// The credentials file could not be written.
    #[error("failed to write credentials to {path}: {reason}")]
    CredentialsWriteFailed { path: PathBuf, reason: String },

    /// The PHP installation root could not be scanned.
    #[error("failed to discover PHP runtimes under {root}: {reason}")]
    RuntimeDiscoveryFailed { root: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ControlPlaneUnavailable { binary, .. } => vec![
                format!("The '{}' binary could not be executed", binary),
                "Check that CloudPanel is installed on this server".into(),
                "Run sitewright as a user that may invoke the control plane (usually root)".into(),
            ],
            Self::SiteCreationFailed { .. } => vec![
                "The control plane rejected the site".into(),
                "A site for this domain may already exist — check the CloudPanel UI".into(),
            ],
            Self::DatabaseCreationFailed { .. } => vec![
                "The site was created but its database was not".into(),
                "A database with the derived name may already exist".into(),
            ],
            Self::CertificateInstallFailed { domain, .. } => vec![
                format!("Certificate issuance failed for {}", domain),
                "Confirm the domain's DNS record points at this server".into(),
                "The site itself was created; re-run issuance once DNS has propagated".into(),
            ],
            Self::SiteDeletionFailed { .. } => vec![
                "The control plane refused to delete the site".into(),
                "Pass --force to skip the control plane's confirmation".into(),
            ],
            Self::DnsLookupFailed { .. } => vec![
                "The lookup utility (dig) failed or is not installed".into(),
                "Install dnsutils/bind-tools, or skip the check with --skip-dns-check".into(),
            ],
            Self::CredentialsWriteFailed { path, .. } => vec![
                format!("Could not write {}", path.display()),
                "Check that the site user's home directory exists".into(),
            ],
            Self::RuntimeDiscoveryFailed { root, .. } => vec![
                format!("Could not list PHP versions under {}", root.display()),
                "Point --config at the correct PHP installation root".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ControlPlaneUnavailable { .. } => ErrorCategory::Configuration,
            Self::RuntimeDiscoveryFailed { .. } => ErrorCategory::Configuration,
            Self::SiteCreationFailed { .. }
            | Self::DatabaseCreationFailed { .. }
            | Self::CertificateInstallFailed { .. }
            | Self::SiteDeletionFailed { .. }
            | Self::DnsLookupFailed { .. }
            | Self::CredentialsWriteFailed { .. } => ErrorCategory::Internal,
        }
    }
}
