//! Implementation of the `wayfarer entity` command.
//!
//! Responsibility: wire the production adapters into the core
//! [`EntityService`], run the editing session, and display the report.  No
//! business logic lives here.

use tracing::{info, instrument};

use wayfarer_adapters::{JsonEntityStore, LocalFilesystem, TerminalPrompter};
use wayfarer_core::application::{EntityOptions, EntityService, GenerationReport};

use crate::{
    cli::{EntityArgs, GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `wayfarer entity` command.
#[instrument(skip_all, fields(entity = %args.name))]
pub fn execute(args: EntityArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    // A definition file name can be passed directly.
    let name = args
        .name
        .strip_suffix(".json")
        .unwrap_or(&args.name)
        .to_string();

    let project_root = std::env::current_dir().map_err(|e| CliError::InvalidProjectDir {
        path: std::path::PathBuf::from("."),
        reason: e.to_string(),
    })?;
    let service = EntityService::new(
        Box::new(JsonEntityStore::new(&project_root)),
        Box::new(LocalFilesystem::new(&project_root)),
        Box::new(TerminalPrompter::new()),
    );

    let options = EntityOptions {
        force: args.force || args.regenerate,
        timestamp: Some(chrono::Local::now().format("%Y%m%d%H%M%S").to_string()),
    };

    info!(entity = %name, force = options.force, "Entity session started");
    let report = service.generate(&name, &options)?;

    display_report(&report, &output)?;

    if !args.skip_install {
        output.print("")?;
        output.print("Run 'gulp install' to install dependencies and deploy resources.")?;
    }
    Ok(())
}

fn display_report(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    for path in &report.written {
        output.success(&format!("create {}", path.display()))?;
    }
    for warning in &report.warnings {
        output.warning(warning)?;
    }
    if report.persisted {
        output.info(&format!(
            "Definition saved to .wayfarer/{}.json",
            report.entity
        ))?;
    }
    Ok(())
}
