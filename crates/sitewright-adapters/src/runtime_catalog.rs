//! PHP runtime discovery adapters.

use std::path::PathBuf;

use tracing::debug;
use walkdir::WalkDir;

use sitewright_core::{
    application::{ApplicationError, ports::RuntimeCatalog},
    domain::PhpVersion,
    error::CoreResult,
};

/// Directory-scanning runtime catalog.
///
/// CloudPanel installs one configuration directory per PHP release under
/// the PHP root (`/etc/php/8.3`, `/etc/php/8.2`, ...). Whatever directory
/// name parses as a version is an installed runtime; anything else
/// (`mods-available`, stray files) is skipped silently.
#[derive(Debug, Clone)]
pub struct DirRuntimeCatalog {
    root: PathBuf,
}

impl DirRuntimeCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl RuntimeCatalog for DirRuntimeCatalog {
    fn installed_php_versions(&self) -> CoreResult<Vec<PhpVersion>> {
        if !self.root.is_dir() {
            return Err(ApplicationError::RuntimeDiscoveryFailed {
                root: self.root.clone(),
                reason: "not a directory".into(),
            }
            .into());
        }

        let mut versions: Vec<PhpVersion> = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_dir())
            .filter_map(|entry| entry.file_name().to_str()?.parse().ok())
            .collect();

        versions.sort();
        versions.reverse(); // newest first
        debug!(root = %self.root.display(), ?versions, "discovered php runtimes");
        Ok(versions)
    }
}

/// Fixed catalog for testing.
#[derive(Debug, Clone, Default)]
pub struct StaticRuntimeCatalog {
    versions: Vec<PhpVersion>,
}

impl StaticRuntimeCatalog {
    pub fn new(versions: Vec<PhpVersion>) -> Self {
        Self { versions }
    }
}

impl RuntimeCatalog for StaticRuntimeCatalog {
    fn installed_php_versions(&self) -> CoreResult<Vec<PhpVersion>> {
        Ok(self.versions.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn scans_version_directories_newest_first() {
        let root = tempfile::tempdir().unwrap();
        for name in ["7.4", "8.3", "8.1", "mods-available"] {
            fs::create_dir(root.path().join(name)).unwrap();
        }
        // A stray file must not be picked up even if its name parses.
        fs::write(root.path().join("8.9"), "").unwrap();

        let catalog = DirRuntimeCatalog::new(root.path());
        let versions = catalog.installed_php_versions().unwrap();
        assert_eq!(
            versions,
            vec![
                PhpVersion::new(8, 3),
                PhpVersion::new(8, 1),
                PhpVersion::new(7, 4)
            ]
        );
    }

    #[test]
    fn empty_root_yields_empty_catalog() {
        let root = tempfile::tempdir().unwrap();
        let catalog = DirRuntimeCatalog::new(root.path());
        assert!(catalog.installed_php_versions().unwrap().is_empty());
    }

    #[test]
    fn missing_root_is_a_discovery_failure() {
        let catalog = DirRuntimeCatalog::new("/nonexistent/php-root");
        assert!(catalog.installed_php_versions().is_err());
    }

    #[test]
    fn static_catalog_returns_configured_versions() {
        let catalog = StaticRuntimeCatalog::new(vec![PhpVersion::new(8, 3)]);
        assert_eq!(
            catalog.installed_php_versions().unwrap(),
            vec![PhpVersion::new(8, 3)]
        );
    }
}
