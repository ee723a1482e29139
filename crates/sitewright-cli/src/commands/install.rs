//! Implementation of the `sitewright install` command.
//!
//! Responsibility: translate CLI arguments (or prompt answers) into a
//! validated domain + runtime + template triple, run the DNS pre-flight,
//! call the core provision service, and display results. No business logic
//! lives here.

use tracing::{debug, info, instrument};

use sitewright_adapters::{
    ClpctlControlPlane, DigResolver, DirRuntimeCatalog, HomeCredentialsStore, RandSecretGenerator,
};
use sitewright_core::{
    application::{
        ProvisionOutcome, ProvisionService,
        ports::{CertificateOutcome, DnsResolver, RuntimeCatalog},
    },
    domain::{
        DomainName, DomainValidator, PhpVersion, ServerAddresses, SiteIdentifier, VhostTemplate,
    },
};

use crate::{
    cli::{InstallArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt,
};

/// Execute the `sitewright install` command.
///
/// Dispatch sequence:
/// 1. Resolve the domain (flag or prompt loop) and derive its identifier
/// 2. Resolve the PHP version against the installed runtimes
/// 3. Resolve the vhost template
/// 4. DNS pre-flight (confirm on mismatch or absence)
/// 5. Show configuration and confirm unless `--yes` or `--quiet`
/// 6. Early-exit if `--dry-run`
/// 7. Provision via `ProvisionService`
/// 8. Print credentials location and next steps
#[instrument(skip_all)]
pub fn execute(
    args: InstallArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Domain + identifier
    let domain = resolve_domain(&args, &global)?;
    let site_user = SiteIdentifier::derive(&domain);

    // 2. PHP version
    let catalog = DirRuntimeCatalog::new(&config.paths.php_root);
    let php_version = resolve_php_version(&args, &config, &catalog)?;

    // 3. Template
    let template = resolve_template(&args, &config)?;

    debug!(
        domain = %domain,
        site_user = %site_user,
        php = %php_version,
        template = %template,
        "install request resolved"
    );

    // 4. DNS pre-flight
    if config.server.dns_check && !args.skip_dns_check {
        dns_preflight(&domain, &config, &args, &output)?;
    }

    // 5. Show configuration and confirm
    if !global.quiet && !args.yes {
        show_configuration(&domain, &site_user, php_version, &template, &output)?;
        if !prompt::confirm("Provision this site?", true)? {
            return Err(CliError::Cancelled);
        }
    }

    // 6. Dry run: describe but do not touch the control plane.
    if args.dry_run {
        output.info(&format!("Dry run: would provision '{domain}'"))?;
        output.info(&format!("  Site user:     {site_user}"))?;
        output.info(&format!("  PHP version:   {php_version}"))?;
        output.info(&format!("  Template:      {template}"))?;
        output.info(&format!(
            "  Credentials:   {}/{}/site_credentials.txt",
            config.paths.home_root.display(),
            site_user
        ))?;
        return Ok(());
    }

    // 7. Create adapters and provision
    let service = ProvisionService::new(
        Box::new(ClpctlControlPlane::new(&config.control_plane.binary)),
        Box::new(RandSecretGenerator::new()),
        Box::new(HomeCredentialsStore::new(&config.paths.home_root)),
        Box::new(catalog),
    );

    output.header(&format!("Provisioning '{domain}'..."))?;
    info!(domain = %domain, "provisioning started");

    let outcome = service
        .provision(domain.clone(), php_version, template)
        .map_err(CliError::Core)?;

    info!(domain = %domain, "provisioning completed");

    // 8. Success + certificate status + next steps
    report_outcome(&outcome, &global, &output)
}

// ── Input resolution ──────────────────────────────────────────────────────────

/// Flag-supplied domains fail hard on invalid input (non-interactive
/// callers need the exit code); omitted domains enter the prompt loop.
fn resolve_domain(args: &InstallArgs, global: &GlobalArgs) -> CliResult<DomainName> {
    match &args.domain {
        Some(raw) => DomainValidator::validate_domain(raw).map_err(|e| CliError::Core(e.into())),
        None if global.quiet || args.yes => Err(CliError::InvalidInput {
            message: "a DOMAIN argument is required with --yes / --quiet".into(),
            source: None,
        }),
        None => prompt::domain(),
    }
}

/// Resolve the PHP version from flag, config default, or prompt.
///
/// A flag- or config-supplied version is checked against the installed
/// runtimes when the catalog is readable; an unreadable catalog only logs a
/// warning so that explicit versions keep working on unusual layouts.
fn resolve_php_version(
    args: &InstallArgs,
    config: &AppConfig,
    catalog: &DirRuntimeCatalog,
) -> CliResult<PhpVersion> {
    let requested = args
        .php_version
        .as_deref()
        .or(config.defaults.php_version.as_deref());

    if let Some(raw) = requested {
        let version =
            DomainValidator::validate_php_version(raw).map_err(|e| CliError::Core(e.into()))?;
        match catalog.installed_php_versions() {
            Ok(installed) if !installed.is_empty() && !installed.contains(&version) => {
                return Err(CliError::RuntimeNotInstalled {
                    requested: version.to_string(),
                    available: installed.iter().map(ToString::to_string).collect(),
                });
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("could not verify PHP version against catalog: {e}");
            }
        }
        return Ok(version);
    }

    let installed = catalog.installed_php_versions().map_err(CliError::Core)?;
    if installed.is_empty() {
        return Err(CliError::NoRuntimesFound {
            root: config.paths.php_root.clone(),
        });
    }
    prompt::php_version(&installed, None)
}

fn resolve_template(args: &InstallArgs, config: &AppConfig) -> CliResult<VhostTemplate> {
    let requested = args
        .template
        .as_deref()
        .or(config.defaults.vhost_template.as_deref());

    match requested {
        Some(raw) => {
            DomainValidator::validate_vhost_template(raw).map_err(|e| CliError::Core(e.into()))
        }
        None => prompt::vhost_template(config.defaults.vhost_template.as_deref()),
    }
}

// ── DNS pre-flight ────────────────────────────────────────────────────────────

/// Compare the domain's DNS answers against this server's addresses.
///
/// Mismatch and absence are warnings gated on operator confirmation, never
/// hard failures — certificates will fail until DNS propagates, but the
/// operator may want the site created first.
fn dns_preflight(
    domain: &DomainName,
    config: &AppConfig,
    args: &InstallArgs,
    output: &OutputManager,
) -> CliResult<()> {
    let server = ServerAddresses::new(config.server.ipv4, config.server.ipv6);
    let resolver = DigResolver::new();

    match resolver.resolve(domain) {
        Ok(addrs) if addrs.is_empty() => {
            output.warning(&format!("{domain} does not resolve to any address yet"))?;
            continue_despite_dns(args, output)
        }
        Ok(addrs) if server.is_unknown() => {
            let rendered: Vec<String> = addrs.iter().map(ToString::to_string).collect();
            output.info(&format!(
                "{domain} resolves to {} (server address not configured, cannot compare)",
                rendered.join(", ")
            ))?;
            Ok(())
        }
        Ok(addrs) if server.matches_any(&addrs) => {
            output.success(&format!("DNS for {domain} points at this server"))?;
            Ok(())
        }
        Ok(addrs) => {
            let rendered: Vec<String> = addrs.iter().map(ToString::to_string).collect();
            output.warning(&format!(
                "{domain} resolves to {}, not this server",
                rendered.join(", ")
            ))?;
            continue_despite_dns(args, output)
        }
        Err(e) => {
            output.warning(&format!("DNS lookup failed: {e}"))?;
            continue_despite_dns(args, output)
        }
    }
}

fn continue_despite_dns(args: &InstallArgs, output: &OutputManager) -> CliResult<()> {
    if args.yes {
        output.info("Continuing anyway (--yes)")?;
        return Ok(());
    }
    if prompt::confirm("Continue anyway?", false)? {
        Ok(())
    } else {
        Err(CliError::Cancelled)
    }
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(
    domain: &DomainName,
    site_user: &SiteIdentifier,
    php_version: PhpVersion,
    template: &VhostTemplate,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Domain:        {domain}"))?;
    out.print(&format!("  Site user:     {site_user}"))?;
    out.print(&format!("  Database:      {site_user}"))?;
    out.print(&format!("  PHP version:   {php_version}"))?;
    out.print(&format!("  Template:      {template}"))?;
    out.print("")?;
    Ok(())
}

fn report_outcome(
    outcome: &ProvisionOutcome,
    global: &GlobalArgs,
    output: &OutputManager,
) -> CliResult<()> {
    output.success(&format!(
        "Site '{}' provisioned!",
        outcome.credentials.domain
    ))?;

    match outcome.certificate {
        CertificateOutcome::Issued => output.success("TLS certificate issued")?,
        CertificateOutcome::RateLimited => output.warning(
            "Certificate authority rate limit hit — the site is up without TLS. \
             Re-run issuance once the limit window has passed.",
        )?,
    }

    if output.format() == OutputFormat::Json {
        // JSON goes straight to stdout so it stays parseable in pipes. The
        // passwords are deliberately only in the credentials file.
        let summary = serde_json::json!({
            "domain": outcome.credentials.domain.as_str(),
            "siteUser": outcome.credentials.site_user.as_str(),
            "databaseName": outcome.credentials.database_name.as_str(),
            "credentialsFile": outcome.credentials_path,
            "certificate": match outcome.certificate {
                CertificateOutcome::Issued => "issued",
                CertificateOutcome::RateLimited => "rate-limited",
            },
        });
        println!("{}", serde_json::to_string_pretty(&summary).unwrap_or_default());
        return Ok(());
    }

    output.print("")?;
    output.print(&format!(
        "Credentials written to {}",
        outcome.credentials_path.display()
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!(
            "  su - {}                # work as the site user",
            outcome.credentials.site_user
        ))?;
        output.print(&format!(
            "  cat {}   # hand over the credentials",
            outcome.credentials_path.display()
        ))?;
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
