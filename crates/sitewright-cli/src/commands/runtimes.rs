//! Implementation of the `sitewright runtimes` command.

use sitewright_adapters::DirRuntimeCatalog;
use sitewright_core::application::ports::RuntimeCatalog;

use crate::{
    cli::{OutputFormat, RuntimesArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(_args: RuntimesArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let catalog = DirRuntimeCatalog::new(&config.paths.php_root);
    let versions = catalog.installed_php_versions().map_err(CliError::Core)?;

    if versions.is_empty() {
        return Err(CliError::NoRuntimesFound {
            root: config.paths.php_root.clone(),
        });
    }

    if output.format() == OutputFormat::Json {
        // Serialise as a JSON array to stdout (bypasses OutputManager
        // because JSON output must be parseable even in non-TTY pipes).
        let rendered: Vec<String> = versions.iter().map(ToString::to_string).collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&rendered).unwrap_or_else(|_| "[]".into())
        );
        return Ok(());
    }

    output.header("Installed PHP runtimes:")?;
    for version in &versions {
        output.print(&format!("  {version}"))?;
    }
    Ok(())
}
