//! Command handlers

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::sync::Arc;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::services::ExportService;
use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::Settings;
use crate::domain::entities::Manifest;
use crate::infrastructure::NotionClient;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Export { manifest }) => export(manifest.as_deref()),
        Some(Commands::Completion { shell }) => {
            print_completions(*shell);
            Ok(())
        }
        None => Ok(()),
    }
}

fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

#[instrument(skip_all)]
fn export(manifest_path: Option<&Path>) -> CliResult<()> {
    let settings = Settings::load()?;
    // Credential check comes first: a missing key must fail before the
    // manifest is consumed and before any network activity.
    settings.require_key()?;

    let manifest = read_manifest(manifest_path)?;
    debug!(pages = manifest.len(), "manifest parsed");
    if manifest.is_empty() {
        output::warning("manifest is empty, nothing to export");
        return Ok(());
    }

    let client = NotionClient::from_settings(&settings)?;
    let service = ExportService::new(Arc::new(client));
    service.export_manifest(&manifest)?;

    output::success(&format!("exported {} page(s)", manifest.len()));
    Ok(())
}

fn read_manifest(path: Option<&Path>) -> CliResult<Manifest> {
    let manifest = match path {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                ApplicationError::io(format!("open manifest {}", path.display()), e)
            })?;
            Manifest::from_reader(BufReader::new(file))
        }
        None => Manifest::from_reader(io::stdin().lock()),
    };
    manifest
        .map_err(ApplicationError::from)
        .map_err(Into::into)
}
