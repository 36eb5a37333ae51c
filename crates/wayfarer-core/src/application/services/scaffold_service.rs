//! Scaffold service — application-level generation.
//!
//! Composes the module generators (common, data, ping, gulp) into one run:
//! merge or prompt for the project settings, render every built-in template
//! through the project context, and write the result.  Entity regeneration
//! for previously persisted definitions is composed on top by the caller,
//! which owns the [`EntityService`].
//!
//! [`EntityService`]: crate::application::services::EntityService

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::{
    application::{
        ports::{EntityStore, Filesystem, Prompter},
        services::session::PromptSession,
    },
    domain::{ProjectContext, ProjectSettings, validation},
    error::WayfarerResult,
};

/// One built-in template: a relative output path and its `{{VARIABLE}}`
/// body.
#[derive(Debug, Clone, Copy)]
pub struct TemplateFile {
    pub path: &'static str,
    pub body: &'static str,
}

/// Options carried in from the CLI.
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    /// `--skip-install`: only print the install hint.
    pub skip_install: bool,
    /// `--yes`: accept defaults without prompting.
    pub assume_defaults: bool,
    /// Fallback application name (usually the working directory's name).
    pub default_name: String,
}

/// What one app-generation run produced, for the CLI to display.
#[derive(Debug, Clone)]
pub struct AppReport {
    pub settings: ProjectSettings,
    /// Files written, relative to the project root.
    pub written: Vec<PathBuf>,
    /// Entities with a persisted definition, to be regenerated by the
    /// caller so generated code stays in sync with the templates.
    pub entities_to_regenerate: Vec<String>,
}

/// Orchestrates application scaffolding.
pub struct ScaffoldService {
    store: Box<dyn EntityStore>,
    filesystem: Box<dyn Filesystem>,
    prompter: Box<dyn Prompter>,
}

impl ScaffoldService {
    pub fn new(
        store: Box<dyn EntityStore>,
        filesystem: Box<dyn Filesystem>,
        prompter: Box<dyn Prompter>,
    ) -> Self {
        Self {
            store,
            filesystem,
            prompter,
        }
    }

    /// Scaffold or refresh the application from the built-in template set.
    #[instrument(skip_all)]
    pub fn scaffold(
        &self,
        templates: &[TemplateFile],
        options: &AppOptions,
    ) -> WayfarerResult<AppReport> {
        let mut session = PromptSession::new();
        let settings = self.resolve_settings(options, &mut session)?;
        self.store.save_settings(&settings)?;
        info!(base_name = %settings.base_name, "Project settings resolved");

        let context = ProjectContext::new(&settings);
        let mut written = Vec::with_capacity(templates.len());
        for template in templates {
            let path = PathBuf::from(template.path);
            self.filesystem
                .write_file(&path, &context.render(template.body))?;
            written.push(path);
        }
        info!(files = written.len(), "Application files written");

        Ok(AppReport {
            settings,
            written,
            entities_to_regenerate: self.store.list()?,
        })
    }

    /// Merge persisted settings with prompts.  The application name, email,
    /// and region are asked only on the first run; answers are numbered
    /// through the shared [`PromptSession`].
    fn resolve_settings(
        &self,
        options: &AppOptions,
        session: &mut PromptSession,
    ) -> WayfarerResult<ProjectSettings> {
        let existing = self.store.load_settings()?;
        let existing_project = existing.is_some();
        let mut settings = existing.unwrap_or_default();

        if options.assume_defaults {
            if settings.base_name.is_empty() {
                settings.base_name = options.default_name.clone();
            }
            if settings.aws_region.is_none() {
                settings.aws_region = Some("eu-west-1".into());
            }
            return Ok(settings);
        }

        if settings.base_name.is_empty() {
            let message = session.numbered_question("What is the name of your application?");
            settings.base_name = self.prompter.input(
                &message,
                Some(&options.default_name),
                &validation::validate_app_name,
            )?;
        }

        if !existing_project {
            let message =
                session.numbered_question("Enter an email address for AWS notifications");
            let email = self.prompter.input(&message, None, &|_| Ok(()))?;
            if !email.is_empty() {
                settings.aws_notification_email = Some(email);
            }

            let message = session.numbered_question("Enter AWS region to use");
            settings.aws_region =
                Some(self.prompter.input(&message, Some("eu-west-1"), &|_| Ok(()))?);
        }

        Ok(settings)
    }
}
