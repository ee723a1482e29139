//! In-memory control-plane adapter for testing.

use std::sync::{Arc, RwLock};

use sitewright_core::{
    application::{
        ApplicationError,
        ports::{CertificateOutcome, ControlPlane, DatabaseSpec, SiteSpec},
    },
    domain::DomainName,
    error::CoreResult,
};

/// In-memory control plane for testing.
///
/// Records every call and can be scripted to fail a step or report a
/// certificate rate limit.
#[derive(Debug, Clone, Default)]
pub struct MemoryControlPlane {
    inner: Arc<RwLock<MemoryControlPlaneInner>>,
}

#[derive(Debug, Default)]
struct MemoryControlPlaneInner {
    sites: Vec<SiteSpec>,
    databases: Vec<DatabaseSpec>,
    certificates: Vec<DomainName>,
    deletions: Vec<(DomainName, bool)>,
    fail_site: Option<String>,
    fail_database: Option<String>,
    certificate_outcome: Option<CertificateOutcome>,
}

impl MemoryControlPlane {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the next `create_site` call to fail with `output`.
    pub fn fail_site_with(self, output: impl Into<String>) -> Self {
        self.inner.write().unwrap().fail_site = Some(output.into());
        self
    }

    /// Script the next `create_database` call to fail with `output`.
    pub fn fail_database_with(self, output: impl Into<String>) -> Self {
        self.inner.write().unwrap().fail_database = Some(output.into());
        self
    }

    /// Script certificate issuance (defaults to `Issued`).
    pub fn with_certificate_outcome(self, outcome: CertificateOutcome) -> Self {
        self.inner.write().unwrap().certificate_outcome = Some(outcome);
        self
    }

    // ── Inspection helpers ─────────────────────────────────────────────────

    pub fn created_sites(&self) -> Vec<SiteSpec> {
        self.inner.read().unwrap().sites.clone()
    }

    pub fn created_databases(&self) -> Vec<DatabaseSpec> {
        self.inner.read().unwrap().databases.clone()
    }

    pub fn certificate_requests(&self) -> Vec<DomainName> {
        self.inner.read().unwrap().certificates.clone()
    }

    pub fn deletions(&self) -> Vec<(DomainName, bool)> {
        self.inner.read().unwrap().deletions.clone()
    }
}

impl ControlPlane for MemoryControlPlane {
    fn create_site(&self, spec: &SiteSpec) -> CoreResult<()> {
        let mut inner = self.inner.write().unwrap();
        if let Some(output) = inner.fail_site.take() {
            return Err(ApplicationError::SiteCreationFailed {
                domain: spec.domain.to_string(),
                output,
            }
            .into());
        }
        inner.sites.push(spec.clone());
        Ok(())
    }

    fn create_database(&self, spec: &DatabaseSpec) -> CoreResult<()> {
        let mut inner = self.inner.write().unwrap();
        if let Some(output) = inner.fail_database.take() {
            return Err(ApplicationError::DatabaseCreationFailed {
                domain: spec.domain.to_string(),
                output,
            }
            .into());
        }
        inner.databases.push(spec.clone());
        Ok(())
    }

    fn issue_certificate(&self, domain: &DomainName) -> CoreResult<CertificateOutcome> {
        let mut inner = self.inner.write().unwrap();
        inner.certificates.push(domain.clone());
        Ok(inner
            .certificate_outcome
            .unwrap_or(CertificateOutcome::Issued))
    }

    fn delete_site(&self, domain: &DomainName, force: bool) -> CoreResult<()> {
        let mut inner = self.inner.write().unwrap();
        inner.deletions.push((domain.clone(), force));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitewright_core::domain::{PhpVersion, VhostTemplate};

    fn spec() -> SiteSpec {
        SiteSpec {
            domain: DomainName::parse("example.com").unwrap(),
            php_version: PhpVersion::new(8, 2),
            vhost_template: VhostTemplate::new("Generic").unwrap(),
            site_user: "example".into(),
            site_user_password: "pw".into(),
        }
    }

    #[test]
    fn records_calls_in_order() {
        let plane = MemoryControlPlane::new();
        plane.create_site(&spec()).unwrap();
        plane
            .issue_certificate(&DomainName::parse("example.com").unwrap())
            .unwrap();

        assert_eq!(plane.created_sites().len(), 1);
        assert_eq!(plane.certificate_requests().len(), 1);
        assert!(plane.created_databases().is_empty());
    }

    #[test]
    fn scripted_site_failure_fires_once() {
        let plane = MemoryControlPlane::new().fail_site_with("already exists");
        assert!(plane.create_site(&spec()).is_err());
        assert!(plane.create_site(&spec()).is_ok());
    }

    #[test]
    fn scripted_certificate_outcome_is_returned() {
        let plane =
            MemoryControlPlane::new().with_certificate_outcome(CertificateOutcome::RateLimited);
        let outcome = plane
            .issue_certificate(&DomainName::parse("example.com").unwrap())
            .unwrap();
        assert_eq!(outcome, CertificateOutcome::RateLimited);
    }
}
