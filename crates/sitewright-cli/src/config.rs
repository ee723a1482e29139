//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config`, or the default location)
//! 3. Built-in defaults (always present)

use std::net::{Ipv4Addr, Ipv6Addr};
use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Control-plane invocation settings.
    pub control_plane: ControlPlaneConfig,
    /// Filesystem locations.
    pub paths: PathsConfig,
    /// Default values for new sites.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// This server's public addresses, for the DNS pre-flight.
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlPlaneConfig {
    /// Path to the CloudPanel CLI.
    pub binary: PathBuf,
}

impl Default for ControlPlaneConfig {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("clpctl"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Root of the PHP installation tree (one directory per version).
    pub php_root: PathBuf,
    /// Root under which site users' homes live.
    pub home_root: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            php_root: PathBuf::from("/etc/php"),
            home_root: PathBuf::from("/home"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// PHP version preselected in the prompt / used when flags are partial.
    pub php_version: Option<String>,
    /// Vhost template preselected in the prompt.
    pub vhost_template: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Public IPv4 of this server, compared against DNS answers.
    pub ipv4: Option<Ipv4Addr>,
    /// Public IPv6 of this server.
    pub ipv6: Option<Ipv6Addr>,
    /// Master switch for the DNS pre-flight check.
    pub dns_check: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ipv4: None,
            ipv6: None,
            dns_check: true,
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicitly passed `--config` file must exist; the default location
    /// is optional and silently skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };

        if !path.is_file() {
            if required {
                anyhow::bail!("config file not found: {}", path.display());
            }
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self =
            toml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.sitewright.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "sitewright", "sitewright")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".sitewright.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binary_is_clpctl() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.control_plane.binary, PathBuf::from("clpctl"));
    }

    #[test]
    fn default_paths_follow_cloudpanel_conventions() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.paths.php_root, PathBuf::from("/etc/php"));
        assert_eq!(cfg.paths.home_root, PathBuf::from("/home"));
    }

    #[test]
    fn dns_check_defaults_on() {
        assert!(AppConfig::default().server.dns_check);
    }

    #[test]
    fn load_without_file_returns_defaults() {
        // The default config path is absent in test environments.
        let cfg = AppConfig::load(None).unwrap();
        assert!(cfg.defaults.php_version.is_none());
    }

    #[test]
    fn load_missing_explicit_file_errors() {
        let missing = PathBuf::from("/nonexistent/sitewright.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn partial_file_merges_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[server]\nipv4 = \"203.0.113.10\"\n\n[defaults]\nphp_version = \"8.3\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.server.ipv4, Some("203.0.113.10".parse().unwrap()));
        assert_eq!(cfg.defaults.php_version.as_deref(), Some("8.3"));
        // untouched sections keep their defaults
        assert_eq!(cfg.control_plane.binary, PathBuf::from("clpctl"));
        assert!(cfg.server.dns_check);
    }

    #[test]
    fn config_path_is_absolute_or_relative() {
        // Just assert it doesn't panic and returns a non-empty path.
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
