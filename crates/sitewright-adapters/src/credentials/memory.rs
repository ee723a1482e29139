//! In-memory credentials store for testing.

use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{Arc, RwLock},
};

use sitewright_core::{
    application::ports::CredentialsStore, domain::SiteCredentials, error::CoreResult,
};

/// In-memory credentials store for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialsStore {
    inner: Arc<RwLock<HashMap<PathBuf, String>>>,
}

impl MemoryCredentialsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a written file's content (testing helper).
    pub fn read_file(&self, path: &PathBuf) -> Option<String> {
        self.inner.read().ok()?.get(path).cloned()
    }

    /// All written paths.
    pub fn written_paths(&self) -> Vec<PathBuf> {
        self.inner.read().unwrap().keys().cloned().collect()
    }
}

impl CredentialsStore for MemoryCredentialsStore {
    fn write(&self, credentials: &SiteCredentials) -> CoreResult<PathBuf> {
        let path = credentials.path_under("/home");
        self.inner
            .write()
            .unwrap()
            .insert(path.clone(), credentials.render());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitewright_core::domain::{DomainName, SiteIdentifier};

    #[test]
    fn stores_rendered_body_at_canonical_path() {
        let domain = DomainName::parse("staging.example.com").unwrap();
        let id = SiteIdentifier::derive(&domain);
        let credentials = SiteCredentials {
            domain,
            site_user: id.clone(),
            site_user_password: "a".into(),
            database_name: id.clone(),
            database_user: id,
            database_password: "b".into(),
        };

        let store = MemoryCredentialsStore::new();
        let path = store.write(&credentials).unwrap();

        assert_eq!(
            path,
            PathBuf::from("/home/example-staging/site_credentials.txt")
        );
        assert!(store.read_file(&path).unwrap().contains("example-staging"));
    }
}
