//! The `InstallRequest` aggregate root and its builder.
//!
//! An `InstallRequest` is the fully-resolved, validated description of one
//! site installation. All fields are present and consistent once `build()`
//! succeeds; the derived site identifier is computed exactly once, at build
//! time, and reused for the account name, database name, and database user.
//!
//! The original tool kept these values in ambient process-wide variables;
//! here they are request-scoped and threaded explicitly.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the
//! responsibility of the application and CLI layers, not the domain.

use std::fmt;

use crate::domain::{
    error::DomainError,
    identifier::SiteIdentifier,
    value_objects::{DomainName, PhpVersion, VhostTemplate},
};

// ── Aggregate root ────────────────────────────────────────────────────────────

/// A fully-validated site installation request.
///
/// Guaranteed on construction:
/// - `site_user` is the identifier derived from `domain`
/// - both passwords are non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    domain: DomainName,
    site_user: SiteIdentifier,
    php_version: PhpVersion,
    vhost_template: VhostTemplate,
    site_user_password: String,
    database_password: String,
}

impl InstallRequest {
    /// Start building a new `InstallRequest`.
    pub fn builder() -> InstallRequestBuilder {
        InstallRequestBuilder::default()
    }

    pub const fn domain(&self) -> &DomainName {
        &self.domain
    }

    /// The derived identifier: account name, database name, database user.
    pub const fn site_user(&self) -> &SiteIdentifier {
        &self.site_user
    }

    pub const fn php_version(&self) -> PhpVersion {
        self.php_version
    }

    pub const fn vhost_template(&self) -> &VhostTemplate {
        &self.vhost_template
    }

    pub fn site_user_password(&self) -> &str {
        &self.site_user_password
    }

    pub fn database_password(&self) -> &str {
        &self.database_password
    }
}

impl fmt::Display for InstallRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} as {} (PHP {}, template {})",
            self.domain, self.site_user, self.php_version, self.vhost_template
        )
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`InstallRequest`].
///
/// `build()` validates that every field was provided and derives the site
/// identifier from the domain. Passwords come from the `SecretGenerator`
/// port at the application layer — the domain never mints secrets.
#[derive(Debug, Default)]
pub struct InstallRequestBuilder {
    domain: Option<DomainName>,
    php_version: Option<PhpVersion>,
    vhost_template: Option<VhostTemplate>,
    site_user_password: Option<String>,
    database_password: Option<String>,
}

impl InstallRequestBuilder {
    pub fn domain(mut self, domain: DomainName) -> Self {
        self.domain = Some(domain);
        self
    }

    pub fn php_version(mut self, version: PhpVersion) -> Self {
        self.php_version = Some(version);
        self
    }

    pub fn vhost_template(mut self, template: VhostTemplate) -> Self {
        self.vhost_template = Some(template);
        self
    }

    pub fn site_user_password(mut self, password: impl Into<String>) -> Self {
        self.site_user_password = Some(password.into());
        self
    }

    pub fn database_password(mut self, password: impl Into<String>) -> Self {
        self.database_password = Some(password.into());
        self
    }

    pub fn build(self) -> Result<InstallRequest, DomainError> {
        let domain = self
            .domain
            .ok_or(DomainError::MissingRequiredField { field: "domain" })?;
        let php_version = self.php_version.ok_or(DomainError::MissingRequiredField {
            field: "php_version",
        })?;
        let vhost_template = self.vhost_template.ok_or(DomainError::MissingRequiredField {
            field: "vhost_template",
        })?;
        let site_user_password =
            self.site_user_password
                .filter(|p| !p.is_empty())
                .ok_or(DomainError::MissingRequiredField {
                    field: "site_user_password",
                })?;
        let database_password =
            self.database_password
                .filter(|p| !p.is_empty())
                .ok_or(DomainError::MissingRequiredField {
                    field: "database_password",
                })?;

        let site_user = SiteIdentifier::derive(&domain);

        Ok(InstallRequest {
            domain,
            site_user,
            php_version,
            vhost_template,
            site_user_password,
            database_password,
        })
    }
}
