//! The rendered credentials record for a provisioned site.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::entities::install_request::InstallRequest;
use crate::domain::identifier::SiteIdentifier;
use crate::domain::value_objects::DomainName;

/// File name of the credentials record inside the site user's home.
pub const CREDENTIALS_FILE_NAME: &str = "site_credentials.txt";

/// Everything the operator needs to hand over after provisioning.
///
/// The site identifier is reused as database name and database user, so the
/// record carries it once and renders it three times. The canonical output
/// location is `/home/{site_user}/site_credentials.txt`, owned by the site
/// user, readable by the owner only — the write itself is an adapter's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteCredentials {
    pub domain: DomainName,
    pub site_user: SiteIdentifier,
    pub site_user_password: String,
    pub database_name: SiteIdentifier,
    pub database_user: SiteIdentifier,
    pub database_password: String,
}

impl SiteCredentials {
    /// The canonical path of the credentials file, relative to `home_root`
    /// (`/home` in production).
    pub fn path_under(&self, home_root: impl Into<PathBuf>) -> PathBuf {
        home_root
            .into()
            .join(self.site_user.as_str())
            .join(CREDENTIALS_FILE_NAME)
    }

    /// Render the credentials file body.
    pub fn render(&self) -> String {
        format!(
            "Site credentials for {domain}\n\
             \n\
             Site user:         {user}\n\
             Site password:     {user_pw}\n\
             \n\
             Database name:     {db}\n\
             Database user:     {db_user}\n\
             Database password: {db_pw}\n",
            domain = self.domain,
            user = self.site_user,
            user_pw = self.site_user_password,
            db = self.database_name,
            db_user = self.database_user,
            db_pw = self.database_password,
        )
    }
}

impl From<&InstallRequest> for SiteCredentials {
    fn from(request: &InstallRequest) -> Self {
        Self {
            domain: request.domain().clone(),
            site_user: request.site_user().clone(),
            site_user_password: request.site_user_password().to_string(),
            database_name: request.site_user().clone(),
            database_user: request.site_user().clone(),
            database_password: request.database_password().to_string(),
        }
    }
}

impl fmt::Display for SiteCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "credentials for {} ({})", self.domain, self.site_user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{PhpVersion, VhostTemplate};

    fn credentials() -> SiteCredentials {
        let request = InstallRequest::builder()
            .domain(DomainName::parse("www.example.com").unwrap())
            .php_version(PhpVersion::new(8, 3))
            .vhost_template(VhostTemplate::new("WordPress").unwrap())
            .site_user_password("user-secret")
            .database_password("db-secret")
            .build()
            .unwrap();
        SiteCredentials::from(&request)
    }

    #[test]
    fn path_follows_home_identifier_convention() {
        let c = credentials();
        assert_eq!(
            c.path_under("/home"),
            PathBuf::from("/home/example/site_credentials.txt")
        );
    }

    #[test]
    fn database_identity_mirrors_site_user() {
        let c = credentials();
        assert_eq!(c.database_name, c.site_user);
        assert_eq!(c.database_user, c.site_user);
    }

    #[test]
    fn render_lists_every_secret_once() {
        let body = credentials().render();
        assert!(body.contains("www.example.com"));
        assert!(body.contains("user-secret"));
        assert!(body.contains("db-secret"));
        // identifier appears as site user, database name, and database user
        assert!(body.matches("example").count() >= 3);
    }
}
