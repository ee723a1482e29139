//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "sitewright",
    bin_name = "sitewright",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} CloudPanel site provisioning",
    long_about = "Sitewright provisions websites on an existing CloudPanel \
                  installation: site, database, TLS certificate, and a \
                  credentials hand-over file, in one guided run.",
    after_help = "EXAMPLES:\n\
        \x20 sitewright install                      # fully interactive\n\
        \x20 sitewright install staging.example.com --php-version 8.3 --template Generic\n\
        \x20 sitewright delete old.example.com --force\n\
        \x20 sitewright runtimes\n\
        \x20 sitewright completions bash > /usr/share/bash-completion/completions/sitewright",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Provision a new site.
    #[command(
        visible_alias = "i",
        about = "Provision a new site",
        after_help = "EXAMPLES:\n\
            \x20 sitewright install\n\
            \x20 sitewright install example.com --php-version 8.3 --template WordPress\n\
            \x20 sitewright install example.com -p 8.2 -t Generic --yes --skip-dns-check"
    )]
    Install(InstallArgs),

    /// Delete a previously provisioned site.
    #[command(
        visible_alias = "rm",
        about = "Delete a site",
        after_help = "EXAMPLES:\n\
            \x20 sitewright delete example.com\n\
            \x20 sitewright delete example.com --force --yes"
    )]
    Delete(DeleteArgs),

    /// List the PHP runtimes installed on this server.
    #[command(
        visible_alias = "ls",
        about = "List installed PHP runtimes",
        after_help = "EXAMPLES:\n\
            \x20 sitewright runtimes"
    )]
    Runtimes(RuntimesArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 sitewright completions bash > ~/.local/share/bash-completion/completions/sitewright\n\
            \x20 sitewright completions zsh  > ~/.zfunc/_sitewright\n\
            \x20 sitewright completions fish > ~/.config/fish/completions/sitewright.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Sitewright configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 sitewright config show\n\
            \x20 sitewright config path\n\
            \x20 sitewright config init"
    )]
    Config(ConfigCommands),
}

// ── install ───────────────────────────────────────────────────────────────────

/// Arguments for `sitewright install`.
#[derive(Debug, Args)]
pub struct InstallArgs {
    /// Domain to provision. Prompted for when omitted.
    #[arg(value_name = "DOMAIN")]
    pub domain: Option<String>,

    /// PHP version for the site, e.g. 8.3. Prompted for when omitted.
    #[arg(short = 'p', long = "php-version", value_name = "VERSION")]
    pub php_version: Option<String>,

    /// Vhost template name, e.g. Generic or WordPress. Prompted for when omitted.
    #[arg(short = 't', long = "template", value_name = "NAME")]
    pub template: Option<String>,

    /// Skip all confirmation prompts.
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,

    /// Show what would be provisioned without touching the control plane.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip the DNS pre-flight check.
    #[arg(long = "skip-dns-check")]
    pub skip_dns_check: bool,
}

// ── delete ────────────────────────────────────────────────────────────────────

/// Arguments for `sitewright delete`.
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Domain of the site to delete.
    #[arg(value_name = "DOMAIN")]
    pub domain: String,

    /// Pass --force through to the control plane (skips its confirmation).
    #[arg(long = "force")]
    pub force: bool,

    /// Skip Sitewright's own confirmation prompt.
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,
}

// ── runtimes ──────────────────────────────────────────────────────────────────

/// Arguments for `sitewright runtimes`.
#[derive(Debug, Args)]
pub struct RuntimesArgs {}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `sitewright completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum, value_name = "SHELL")]
    pub shell: Shell,
}

// ── config ────────────────────────────────────────────────────────────────────

/// Configuration management subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the resolved configuration.
    Show,
    /// Print the configuration file path.
    Path,
    /// Write a default configuration file.
    Init {
        /// Overwrite an existing file.
        #[arg(long = "force")]
        force: bool,
    },
}
