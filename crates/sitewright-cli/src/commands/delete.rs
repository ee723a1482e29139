//! Implementation of the `sitewright delete` command.

use tracing::{info, instrument};

use sitewright_adapters::{
    ClpctlControlPlane, DirRuntimeCatalog, HomeCredentialsStore, RandSecretGenerator,
};
use sitewright_core::{application::ProvisionService, domain::DomainValidator};

use crate::{
    cli::{DeleteArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt,
};

/// Execute the `sitewright delete` command.
#[instrument(skip_all, fields(domain = %args.domain))]
pub fn execute(
    args: DeleteArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let domain =
        DomainValidator::validate_domain(&args.domain).map_err(|e| CliError::Core(e.into()))?;

    if !global.quiet && !args.yes {
        output.warning(&format!(
            "This permanently deletes the site, database, and files for {domain}"
        ))?;
        if !prompt::confirm("Delete this site?", false)? {
            return Err(CliError::Cancelled);
        }
    }

    let service = ProvisionService::new(
        Box::new(ClpctlControlPlane::new(&config.control_plane.binary)),
        Box::new(RandSecretGenerator::new()),
        Box::new(HomeCredentialsStore::new(&config.paths.home_root)),
        Box::new(DirRuntimeCatalog::new(&config.paths.php_root)),
    );

    info!(domain = %domain, force = args.force, "deletion started");
    service.delete(&domain, args.force).map_err(CliError::Core)?;

    output.success(&format!("Site '{domain}' deleted"))?;
    Ok(())
}
