//! Interactive prompts (dialoguer) behind the `interactive` feature.
//!
//! Every prompt validates through the core's parsers, so the
//! prompt-validate-retry loop can never hand an unvalidated value onward.
//! Builds without the feature get stub functions that report the missing
//! feature instead — all inputs must then arrive as flags.

#[cfg(feature = "interactive")]
pub use interactive::{confirm, domain, php_version, vhost_template};

#[cfg(not(feature = "interactive"))]
pub use stubs::{confirm, domain, php_version, vhost_template};

#[cfg(feature = "interactive")]
mod interactive {
    use dialoguer::{Confirm, FuzzySelect, Input, theme::ColorfulTheme};

    use sitewright_core::domain::{DomainName, PhpVersion, VhostTemplate};

    use crate::error::{CliError, CliResult};

    /// Ask for a domain name until a valid one is entered.
    ///
    /// dialoguer re-prompts on validation failure, printing the specific
    /// reason for the rejected input each time.
    pub fn domain() -> CliResult<DomainName> {
        let raw: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Domain to provision (e.g. example.com)")
            .validate_with(|value: &String| {
                DomainName::parse(value).map(|_| ()).map_err(|e| e.to_string())
            })
            .interact_text()
            .map_err(map_dialoguer)?;

        DomainName::parse(&raw).map_err(|e| CliError::Core(e.into()))
    }

    /// Pick a PHP version from the installed runtimes.
    pub fn php_version(
        installed: &[PhpVersion],
        preselect: Option<PhpVersion>,
    ) -> CliResult<PhpVersion> {
        let items: Vec<String> = installed.iter().map(ToString::to_string).collect();
        let default = preselect
            .and_then(|p| installed.iter().position(|v| *v == p))
            .unwrap_or(0);

        let index = FuzzySelect::with_theme(&ColorfulTheme::default())
            .with_prompt("PHP version")
            .items(&items)
            .default(default)
            .interact()
            .map_err(map_dialoguer)?;

        Ok(installed[index])
    }

    /// Pick a vhost template, with an escape hatch for custom names.
    pub fn vhost_template(preselect: Option<&str>) -> CliResult<VhostTemplate> {
        const CUSTOM: &str = "Other (type a name)";

        let mut items: Vec<&str> = VhostTemplate::WELL_KNOWN.to_vec();
        items.push(CUSTOM);

        let default = preselect
            .and_then(|p| items.iter().position(|t| *t == p))
            .unwrap_or(0);

        let index = FuzzySelect::with_theme(&ColorfulTheme::default())
            .with_prompt("Vhost template")
            .items(&items)
            .default(default)
            .interact()
            .map_err(map_dialoguer)?;

        if items[index] == CUSTOM {
            let raw: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Template name")
                .validate_with(|value: &String| {
                    VhostTemplate::new(value.as_str())
                        .map(|_| ())
                        .map_err(|e| e.to_string())
                })
                .interact_text()
                .map_err(map_dialoguer)?;
            return VhostTemplate::new(raw).map_err(|e| CliError::Core(e.into()));
        }

        VhostTemplate::new(items[index]).map_err(|e| CliError::Core(e.into()))
    }

    /// Yes/no confirmation.
    pub fn confirm(prompt: &str, default: bool) -> CliResult<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(map_dialoguer)
    }

    fn map_dialoguer(e: dialoguer::Error) -> CliError {
        CliError::IoError {
            message: "terminal interaction failed".into(),
            source: std::io::Error::other(e.to_string()),
        }
    }
}

#[cfg(not(feature = "interactive"))]
mod stubs {
    use sitewright_core::domain::{DomainName, PhpVersion, VhostTemplate};

    use crate::error::{CliError, CliResult};

    fn unavailable<T>() -> CliResult<T> {
        Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        })
    }

    pub fn domain() -> CliResult<DomainName> {
        unavailable()
    }

    pub fn php_version(
        _installed: &[PhpVersion],
        _preselect: Option<PhpVersion>,
    ) -> CliResult<PhpVersion> {
        unavailable()
    }

    pub fn vhost_template(_preselect: Option<&str>) -> CliResult<VhostTemplate> {
        unavailable()
    }

    pub fn confirm(_prompt: &str, _default: bool) -> CliResult<bool> {
        unavailable()
    }
}
