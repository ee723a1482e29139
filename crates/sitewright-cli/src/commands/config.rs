//! `sitewright config` — inspect and initialise configuration.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Show => {
            output.header("Current Configuration:")?;
            let serialised = render(&config)?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }

        ConfigCommands::Init { force } => {
            let path = AppConfig::config_path();
            if path.exists() && !force {
                return Err(CliError::ConfigError {
                    message: format!(
                        "config file already exists at {} (use --force to overwrite)",
                        path.display()
                    ),
                    source: None,
                });
            }
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_cli_context(|| format!("creating {}", parent.display()))?;
            }
            std::fs::write(&path, render(&AppConfig::default())?)
                .with_cli_context(|| format!("writing {}", path.display()))?;
            output.success(&format!("Wrote default config to {}", path.display()))?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn render(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
