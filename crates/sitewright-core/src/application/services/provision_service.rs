//! Provision Service - main application orchestrator.
//!
//! This service coordinates the entire provisioning workflow:
//! 1. Derive the site identifier and mint both passwords
//! 2. Create the site through the control plane
//! 3. Create the database
//! 4. Request certificate issuance (rate limiting is a value, not a failure)
//! 5. Write the credentials file
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).
//!
//! DNS checking is deliberately NOT here: the lookup gates the operator's
//! confirmation, not the provisioning sequence, so it lives at the CLI
//! boundary behind the `DnsResolver` port.

use std::path::PathBuf;

use tracing::{info, instrument, warn};

use crate::{
    application::ports::{
        CertificateOutcome, ControlPlane, CredentialsStore, DatabaseSpec, PASSWORD_LENGTH,
        RuntimeCatalog, SecretGenerator, SiteSpec,
    },
    domain::{DomainName, InstallRequest, PhpVersion, SiteCredentials, VhostTemplate},
    error::{CoreError, CoreResult},
};

/// What a successful provisioning run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionOutcome {
    pub credentials: SiteCredentials,
    pub credentials_path: PathBuf,
    pub certificate: CertificateOutcome,
}

/// Main provisioning service.
///
/// Orchestrates the site, database, certificate, and credentials workflow.
pub struct ProvisionService {
    control_plane: Box<dyn ControlPlane>,
    secrets: Box<dyn SecretGenerator>,
    credentials: Box<dyn CredentialsStore>,
    runtimes: Box<dyn RuntimeCatalog>,
}

impl ProvisionService {
    /// Create a new provision service with the given adapters.
    pub fn new(
        control_plane: Box<dyn ControlPlane>,
        secrets: Box<dyn SecretGenerator>,
        credentials: Box<dyn CredentialsStore>,
        runtimes: Box<dyn RuntimeCatalog>,
    ) -> Self {
        Self {
            control_plane,
            secrets,
            credentials,
            runtimes,
        }
    }

    /// Provision a site end to end.
    ///
    /// This is the main use case. Each step propagates its failure
    /// immediately — there are no retries and no rollback; the operator is
    /// told exactly how far the run got.
    #[instrument(skip_all, fields(domain = %domain))]
    pub fn provision(
        &self,
        domain: DomainName,
        php_version: PhpVersion,
        vhost_template: VhostTemplate,
    ) -> CoreResult<ProvisionOutcome> {
        // 1. Assemble the request: identifier derivation + fresh secrets.
        let request = InstallRequest::builder()
            .domain(domain)
            .php_version(php_version)
            .vhost_template(vhost_template)
            .site_user_password(self.secrets.generate(PASSWORD_LENGTH))
            .database_password(self.secrets.generate(PASSWORD_LENGTH))
            .build()
            .map_err(CoreError::Domain)?;

        info!(request = %request, "provisioning site");

        // 2. Site.
        self.control_plane.create_site(&site_spec(&request))?;
        info!(site_user = %request.site_user(), "site created");

        // 3. Database.
        self.control_plane
            .create_database(&database_spec(&request))?;
        info!(database = %request.site_user(), "database created");

        // 4. Certificate. Rate limiting is reported, not fatal — the site
        //    stays up without TLS and issuance can be retried later.
        let certificate = self.control_plane.issue_certificate(request.domain())?;
        match certificate {
            CertificateOutcome::Issued => info!("certificate issued"),
            CertificateOutcome::RateLimited => {
                warn!("certificate authority rate limit hit; site left without TLS")
            }
        }

        // 5. Credentials file.
        let credentials = SiteCredentials::from(&request);
        let credentials_path = self.credentials.write(&credentials)?;
        info!(path = %credentials_path.display(), "credentials written");

        Ok(ProvisionOutcome {
            credentials,
            credentials_path,
            certificate,
        })
    }

    /// Delete a previously provisioned site.
    #[instrument(skip_all, fields(domain = %domain))]
    pub fn delete(&self, domain: &DomainName, force: bool) -> CoreResult<()> {
        self.control_plane.delete_site(domain, force)?;
        info!("site deleted");
        Ok(())
    }

    /// Installed PHP versions, newest first.
    pub fn installed_runtimes(&self) -> CoreResult<Vec<PhpVersion>> {
        self.runtimes.installed_php_versions()
    }
}

// -------------------------------------------------------------------------
// Internal Helpers
// -------------------------------------------------------------------------

fn site_spec(request: &InstallRequest) -> SiteSpec {
    SiteSpec {
        domain: request.domain().clone(),
        php_version: request.php_version(),
        vhost_template: request.vhost_template().clone(),
        site_user: request.site_user().as_str().to_string(),
        site_user_password: request.site_user_password().to_string(),
    }
}

fn database_spec(request: &InstallRequest) -> DatabaseSpec {
    DatabaseSpec {
        domain: request.domain().clone(),
        database_name: request.site_user().as_str().to_string(),
        database_user_name: request.site_user().as_str().to_string(),
        database_user_password: request.database_password().to_string(),
    }
}
