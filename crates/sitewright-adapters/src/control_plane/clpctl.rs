//! Production control-plane adapter shelling out to CloudPanel's `clpctl`.
//!
//! `clpctl` reports problems inconsistently: some failures exit non-zero,
//! others exit zero and print an error line; certificate rate limiting is
//! only visible as prose in the captured output. The substring checks below
//! are the compatibility shim that turns that text back into the typed
//! results the `ControlPlane` port promises — they exist here and nowhere
//! else.

use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, warn};

use sitewright_core::{
    application::{
        ApplicationError,
        ports::{CertificateOutcome, ControlPlane, DatabaseSpec, SiteSpec},
    },
    domain::DomainName,
    error::{CoreError, CoreResult},
};

/// Marker that `clpctl` prints when the certificate authority is throttling.
const RATE_LIMIT_MARKER: &str = "rate limit";

/// Production control plane implementation invoking the `clpctl` binary.
#[derive(Debug, Clone)]
pub struct ClpctlControlPlane {
    binary: PathBuf,
}

impl ClpctlControlPlane {
    /// Use a specific binary path (from configuration).
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Use `clpctl` from `PATH`.
    pub fn system() -> Self {
        Self::new("clpctl")
    }

    /// Run the binary and capture combined output.
    fn run(&self, args: &[String]) -> CoreResult<CapturedOutput> {
        debug!(binary = %self.binary.display(), ?args, "invoking control plane");

        let output = Command::new(&self.binary).args(args).output().map_err(|e| {
            CoreError::Application(ApplicationError::ControlPlaneUnavailable {
                binary: self.binary.display().to_string(),
                reason: e.to_string(),
            })
        })?;

        let mut text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        if !stderr.is_empty() {
            if !text.is_empty() {
                text.push('\n');
            }
            text.push_str(stderr);
        }

        Ok(CapturedOutput {
            success: output.status.success(),
            text,
        })
    }
}

impl ControlPlane for ClpctlControlPlane {
    fn create_site(&self, spec: &SiteSpec) -> CoreResult<()> {
        let captured = self.run(&site_args(spec))?;
        if captured.indicates_failure() {
            return Err(ApplicationError::SiteCreationFailed {
                domain: spec.domain.to_string(),
                output: captured.text,
            }
            .into());
        }
        Ok(())
    }

    fn create_database(&self, spec: &DatabaseSpec) -> CoreResult<()> {
        let captured = self.run(&database_args(spec))?;
        if captured.indicates_failure() {
            return Err(ApplicationError::DatabaseCreationFailed {
                domain: spec.domain.to_string(),
                output: captured.text,
            }
            .into());
        }
        Ok(())
    }

    fn issue_certificate(&self, domain: &DomainName) -> CoreResult<CertificateOutcome> {
        let captured = self.run(&certificate_args(domain))?;

        // Rate limiting wins over the generic error marker: the message
        // usually contains both.
        if captured.contains_marker(RATE_LIMIT_MARKER) {
            warn!(domain = %domain, "certificate authority rate limit reported");
            return Ok(CertificateOutcome::RateLimited);
        }
        if captured.indicates_failure() {
            return Err(ApplicationError::CertificateInstallFailed {
                domain: domain.to_string(),
                output: captured.text,
            }
            .into());
        }
        Ok(CertificateOutcome::Issued)
    }

    fn delete_site(&self, domain: &DomainName, force: bool) -> CoreResult<()> {
        let captured = self.run(&delete_args(domain, force))?;
        if captured.indicates_failure() {
            return Err(ApplicationError::SiteDeletionFailed {
                domain: domain.to_string(),
                output: captured.text,
            }
            .into());
        }
        Ok(())
    }
}

// ── Argument construction ─────────────────────────────────────────────────────

fn site_args(spec: &SiteSpec) -> Vec<String> {
    vec![
        "site:add:php".into(),
        format!("--domainName={}", spec.domain),
        format!("--phpVersion={}", spec.php_version),
        format!("--vhostTemplate={}", spec.vhost_template),
        format!("--siteUser={}", spec.site_user),
        format!("--siteUserPassword={}", spec.site_user_password),
    ]
}

fn database_args(spec: &DatabaseSpec) -> Vec<String> {
    vec![
        "db:add".into(),
        format!("--domainName={}", spec.domain),
        format!("--databaseName={}", spec.database_name),
        format!("--databaseUserName={}", spec.database_user_name),
        format!("--databaseUserPassword={}", spec.database_user_password),
    ]
}

fn certificate_args(domain: &DomainName) -> Vec<String> {
    vec![
        "lets-encrypt:install:certificate".into(),
        format!("--domainName={domain}"),
    ]
}

fn delete_args(domain: &DomainName, force: bool) -> Vec<String> {
    let mut args = vec!["site:delete".into(), format!("--domainName={domain}")];
    if force {
        args.push("--force".into());
    }
    args
}

// ── Output classification ─────────────────────────────────────────────────────

struct CapturedOutput {
    success: bool,
    text: String,
}

impl CapturedOutput {
    fn contains_marker(&self, marker: &str) -> bool {
        self.text.to_ascii_lowercase().contains(marker)
    }

    /// Non-zero exit, or an error marker in the text even on exit 0.
    fn indicates_failure(&self) -> bool {
        !self.success || self.contains_marker("error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitewright_core::domain::{PhpVersion, VhostTemplate};

    fn spec() -> SiteSpec {
        SiteSpec {
            domain: DomainName::parse("example.com").unwrap(),
            php_version: PhpVersion::new(8, 3),
            vhost_template: VhostTemplate::new("Laravel 12").unwrap(),
            site_user: "example".into(),
            site_user_password: "secret-secret-secret-pw1".into(),
        }
    }

    // ── argument construction ─────────────────────────────────────────────

    #[test]
    fn site_args_name_every_field() {
        let args = site_args(&spec());
        assert_eq!(args[0], "site:add:php");
        assert!(args.contains(&"--domainName=example.com".to_string()));
        assert!(args.contains(&"--phpVersion=8.3".to_string()));
        // Spaces survive because arguments never pass through a shell.
        assert!(args.contains(&"--vhostTemplate=Laravel 12".to_string()));
        assert!(args.contains(&"--siteUser=example".to_string()));
    }

    #[test]
    fn database_args_reuse_identifier_for_name_and_user() {
        let args = database_args(&DatabaseSpec {
            domain: DomainName::parse("example.com").unwrap(),
            database_name: "example".into(),
            database_user_name: "example".into(),
            database_user_password: "pw".into(),
        });
        assert_eq!(args[0], "db:add");
        assert!(args.contains(&"--databaseName=example".to_string()));
        assert!(args.contains(&"--databaseUserName=example".to_string()));
    }

    #[test]
    fn delete_args_append_force_only_when_asked() {
        let domain = DomainName::parse("example.com").unwrap();
        assert!(!delete_args(&domain, false).contains(&"--force".to_string()));
        assert!(delete_args(&domain, true).contains(&"--force".to_string()));
    }

    // ── output classification ─────────────────────────────────────────────

    #[test]
    fn zero_exit_clean_output_is_success() {
        let captured = CapturedOutput {
            success: true,
            text: "Site created.".into(),
        };
        assert!(!captured.indicates_failure());
    }

    #[test]
    fn error_marker_fails_even_on_zero_exit() {
        let captured = CapturedOutput {
            success: true,
            text: "ERROR: site already exists".into(),
        };
        assert!(captured.indicates_failure());
    }

    #[test]
    fn rate_limit_marker_is_case_insensitive() {
        let captured = CapturedOutput {
            success: false,
            text: "Error: too many certificates; Rate Limit exceeded".into(),
        };
        assert!(captured.contains_marker(RATE_LIMIT_MARKER));
    }

    // ── process boundary ──────────────────────────────────────────────────

    #[test]
    fn missing_binary_reports_unavailable() {
        let plane = ClpctlControlPlane::new("/nonexistent/clpctl");
        let err = plane.create_site(&spec()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Application(ApplicationError::ControlPlaneUnavailable { .. })
        ));
    }

    #[test]
    #[cfg(unix)]
    fn harmless_binary_counts_as_success() {
        // `true` exits zero and prints nothing; the adapter should treat
        // that as a clean run.
        let plane = ClpctlControlPlane::new("true");
        assert!(plane.create_site(&spec()).is_ok());
    }

    #[test]
    #[cfg(unix)]
    fn failing_binary_surfaces_site_error() {
        let plane = ClpctlControlPlane::new("false");
        let err = plane.create_site(&spec()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Application(ApplicationError::SiteCreationFailed { .. })
        ));
    }
}
