//! Implementation of the `wayfarer app` command.
//!
//! Scaffolds the application from the built-in template set, then re-runs
//! the entity generator for every previously persisted definition so
//! generated code stays in sync after template upgrades.

use tracing::{info, instrument};

use wayfarer_adapters::{JsonEntityStore, LocalFilesystem, TerminalPrompter, builtin_templates};
use wayfarer_core::application::{AppOptions, EntityOptions, EntityService, ScaffoldService};

use crate::{
    cli::{AppArgs, GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `wayfarer app` command.
#[instrument(skip_all)]
pub fn execute(args: AppArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let project_root = std::env::current_dir().map_err(|e| CliError::InvalidProjectDir {
        path: std::path::PathBuf::from("."),
        reason: e.to_string(),
    })?;

    output.header("Welcome to Wayfarer")?;
    output.print(&format!(
        "Application files will be generated in folder: {}",
        project_root.display()
    ))?;
    output.print("")?;

    let store = JsonEntityStore::new(&project_root);
    let filesystem = LocalFilesystem::new(&project_root);
    let service = ScaffoldService::new(
        Box::new(store.clone()),
        Box::new(filesystem.clone()),
        Box::new(TerminalPrompter::new()),
    );

    let options = AppOptions {
        skip_install: args.skip_install,
        assume_defaults: args.yes,
        default_name: default_app_name(&project_root),
    };
    let report = service.scaffold(builtin_templates::app_templates(), &options)?;
    info!(files = report.written.len(), "Application scaffolded");

    for path in &report.written {
        output.success(&format!("create {}", path.display()))?;
    }

    // Keep previously generated entities in sync with the fresh templates.
    if !report.entities_to_regenerate.is_empty() {
        let entity_service = EntityService::new(
            Box::new(store),
            Box::new(filesystem),
            Box::new(TerminalPrompter::new()),
        );
        for name in &report.entities_to_regenerate {
            output.info(&format!("Regenerating entity {name}"))?;
            let entity_report = entity_service.generate(
                name,
                &EntityOptions {
                    force: true,
                    timestamp: None,
                },
            )?;
            for warning in &entity_report.warnings {
                output.warning(warning)?;
            }
        }
    }

    if !args.skip_install {
        output.print("")?;
        output.print("After running 'npm install', deploy with:")?;
        output.print("  gulp install")?;
    }

    output.print("")?;
    output.success("App generated successfully.")?;
    Ok(())
}

/// Default application name: the working directory's name when it is a
/// valid identifier, else `wayfarer`.
fn default_app_name(project_root: &std::path::Path) -> String {
    project_root
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| {
            !n.is_empty() && n.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
        .unwrap_or("wayfarer")
        .to_string()
}

// ── tests ─────────────────────────────────────────────────────────────────────
