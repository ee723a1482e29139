//! Credentials file writer using std::fs.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::warn;

use sitewright_core::{
    application::{ApplicationError, ports::CredentialsStore},
    domain::SiteCredentials,
    error::{CoreError, CoreResult},
};

/// Production credentials store writing under the site users' home root.
///
/// The home directory itself (`/home/{site_user}`) is the control plane's —
/// it appears when the site is created and this adapter never creates it.
/// The file is chmodded to owner read/write only; ownership is handed to
/// the site user via `chown`, which requires root — when it fails (local
/// development, tests) the file stays with the invoking user and a warning
/// is logged.
#[derive(Debug, Clone)]
pub struct HomeCredentialsStore {
    home_root: PathBuf,
}

impl HomeCredentialsStore {
    pub fn new(home_root: impl Into<PathBuf>) -> Self {
        Self {
            home_root: home_root.into(),
        }
    }

    /// The conventional production root.
    pub fn system() -> Self {
        Self::new("/home")
    }
}

impl CredentialsStore for HomeCredentialsStore {
    fn write(&self, credentials: &SiteCredentials) -> CoreResult<PathBuf> {
        let path = credentials.path_under(&self.home_root);

        let body = format!(
            "# Generated by sitewright on {}\n{}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            credentials.render()
        );

        std::fs::write(&path, body).map_err(|e| map_io_error(&path, e, "write"))?;
        restrict_to_owner(&path)?;
        chown_to_site_user(&path, credentials.site_user.as_str());

        Ok(path)
    }
}

#[cfg(unix)]
fn restrict_to_owner(path: &Path) -> CoreResult<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = std::fs::metadata(path).map_err(|e| map_io_error(path, e, "stat"))?;
    let mut perms = metadata.permissions();
    perms.set_mode(0o600);
    std::fs::set_permissions(path, perms).map_err(|e| map_io_error(path, e, "chmod"))
}

#[cfg(not(unix))]
fn restrict_to_owner(_path: &Path) -> CoreResult<()> {
    Ok(())
}

/// Hand the file to the site user. Best-effort: requires root.
fn chown_to_site_user(path: &Path, site_user: &str) {
    let result = Command::new("chown")
        .arg(format!("{site_user}:{site_user}"))
        .arg(path)
        .output();
    match result {
        Ok(output) if output.status.success() => {}
        Ok(output) => warn!(
            path = %path.display(),
            site_user,
            stderr = %String::from_utf8_lossy(&output.stderr).trim(),
            "could not chown credentials file"
        ),
        Err(e) => warn!(path = %path.display(), %e, "chown not invocable"),
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> CoreError {
    ApplicationError::CredentialsWriteFailed {
        path: path.to_path_buf(),
        reason: format!("failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitewright_core::domain::{DomainName, SiteIdentifier};
    use std::fs;

    fn credentials() -> SiteCredentials {
        let domain = DomainName::parse("example.com").unwrap();
        let id = SiteIdentifier::derive(&domain);
        SiteCredentials {
            domain,
            site_user: id.clone(),
            site_user_password: "user-pw".into(),
            database_name: id.clone(),
            database_user: id,
            database_password: "db-pw".into(),
        }
    }

    #[test]
    fn writes_under_site_user_home() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("example")).unwrap();

        let store = HomeCredentialsStore::new(root.path());
        let path = store.write(&credentials()).unwrap();

        assert_eq!(path, root.path().join("example/site_credentials.txt"));
        let body = fs::read_to_string(&path).unwrap();
        assert!(body.contains("user-pw"));
        assert!(body.contains("db-pw"));
    }

    #[test]
    #[cfg(unix)]
    fn file_is_owner_read_write_only() {
        use std::os::unix::fs::PermissionsExt;

        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("example")).unwrap();

        let store = HomeCredentialsStore::new(root.path());
        let path = store.write(&credentials()).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn missing_home_directory_is_a_write_failure() {
        let root = tempfile::tempdir().unwrap();
        // no root/example directory
        let store = HomeCredentialsStore::new(root.path());
        let err = store.write(&credentials()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Application(ApplicationError::CredentialsWriteFailed { .. })
        ));
    }
}
