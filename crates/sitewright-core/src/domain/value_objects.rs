//! Domain value objects: DomainName, PhpVersion, VhostTemplate.
//!
//! # Design
//!
//! These are pure value types — equality-by-value, no identity. They hold NO
//! derivation logic. Identifier derivation lives in `identifier.rs`. This
//! file's only job is to define the types, their string representations, and
//! their parsers.
//!
//! # Normalization policy
//!
//! `DomainName::parse` lowercase-folds its input before validation and
//! rejects a trailing dot instead of stripping it. DNS names are
//! case-insensitive and every downstream consumer of the derived identifier
//! (system account, database name, database user) requires lowercase, so
//! folding once at the construction point is what guarantees the
//! `[a-z0-9-]` identifier alphabet.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── DomainName ───────────────────────────────────────────────────────────────

/// A syntactically valid, lowercase fully qualified domain name.
///
/// Validity is a shape check only: the name must consist of ASCII letters,
/// digits, dots and hyphens, and end in a dot followed by an alphabetic
/// top-level label of at least two characters. Whether the domain resolves
/// or is registered is never checked here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DomainName(String);

impl DomainName {
    /// Parse and validate a domain name.
    ///
    /// The input is trimmed and lowercase-folded first; the stored form is
    /// always lowercase.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let folded = input.trim().to_ascii_lowercase();

        let reject = |reason: &str| DomainError::InvalidDomainName {
            input: input.trim().to_string(),
            reason: reason.to_string(),
        };

        if folded.is_empty() {
            return Err(reject("domain cannot be empty"));
        }
        if folded.ends_with('.') {
            return Err(reject("trailing dot is not accepted"));
        }
        if let Some(c) = folded
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '.' || *c == '-'))
        {
            return Err(reject(&format!("character '{c}' is not allowed")));
        }

        // The name must end in `.<tld>` with an alphabetic tld of length >= 2,
        // and there must be something before that final dot.
        let Some((head, tld)) = folded.rsplit_once('.') else {
            return Err(reject("expected at least two dot-separated labels"));
        };
        if head.is_empty() {
            return Err(reject("missing name before the top-level domain"));
        }
        if tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(reject(
                "top-level domain must be alphabetic and at least two characters",
            ));
        }

        Ok(Self(folded))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The dot-separated labels, left to right.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DomainName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DomainName> for String {
    fn from(value: DomainName) -> Self {
        value.0
    }
}

// ── PhpVersion ───────────────────────────────────────────────────────────────

/// A PHP runtime version in `<major>.<minor>` form.
///
/// Ordered so catalogs and prompts can present the newest release first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhpVersion {
    major: u8,
    minor: u8,
}

impl PhpVersion {
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }

    pub const fn major(&self) -> u8 {
        self.major
    }

    pub const fn minor(&self) -> u8 {
        self.minor
    }
}

impl fmt::Display for PhpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for PhpVersion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let reject = || DomainError::InvalidPhpVersion { input: s.into() };

        let (major, minor) = s.trim().split_once('.').ok_or_else(reject)?;
        let major: u8 = major.parse().map_err(|_| reject())?;
        let minor: u8 = minor.parse().map_err(|_| reject())?;
        Ok(Self { major, minor })
    }
}

impl TryFrom<String> for PhpVersion {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PhpVersion> for String {
    fn from(value: PhpVersion) -> Self {
        value.to_string()
    }
}

// ── VhostTemplate ────────────────────────────────────────────────────────────

/// The name of a CloudPanel vhost template.
///
/// The control plane owns the template definitions; this type only carries
/// the chosen name. [`VhostTemplate::WELL_KNOWN`] drives the interactive
/// prompt — free-form names from flags are accepted as long as they are
/// non-empty, since operators can install custom templates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VhostTemplate(String);

impl VhostTemplate {
    /// Templates shipped with a stock CloudPanel installation.
    pub const WELL_KNOWN: &'static [&'static str] = &[
        "Generic",
        "WordPress",
        "WooCommerce",
        "Laravel 12",
        "Symfony",
        "Drupal 11",
        "Joomla 5",
        "Nextcloud",
        "PrestaShop",
        "TYPO3 v13",
    ];

    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidVhostTemplate {
                reason: "template name cannot be empty".into(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VhostTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for VhostTemplate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for VhostTemplate {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<VhostTemplate> for String {
    fn from(value: VhostTemplate) -> Self {
        value.0
    }
}
