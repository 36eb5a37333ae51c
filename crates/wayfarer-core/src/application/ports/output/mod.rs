//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `wayfarer-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{EntityDefinition, ProjectSettings};
use crate::error::WayfarerResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `wayfarer_adapters::filesystem::LocalFilesystem` (production)
/// - `wayfarer_adapters::filesystem::MemoryFilesystem` (testing)
///
/// All paths are relative to the project root the adapter was built with.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> WayfarerResult<()>;

    /// Write content to a file, creating parent directories as needed.
    fn write_file(&self, path: &Path, content: &str) -> WayfarerResult<()>;

    /// Read a file into a string.
    fn read_to_string(&self, path: &Path) -> WayfarerResult<String>;

    /// Set file permissions.
    fn set_permissions(&self, path: &Path, executable: bool) -> WayfarerResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> WayfarerResult<()>;
}

/// Port for the project's hidden configuration directory.
///
/// One JSON file per entity, named by the entity's capitalized identifier,
/// plus the project settings file.
///
/// Implemented by:
/// - `wayfarer_adapters::entity_store::JsonEntityStore` (production)
/// - `wayfarer_adapters::entity_store::MemoryEntityStore` (testing)
pub trait EntityStore: Send + Sync {
    /// Load a persisted entity definition, if one exists.
    ///
    /// Returns `Ok(None)` when no file exists.  A file that exists but is
    /// not parseable JSON is an [`DefinitionUnreadable`] error; callers
    /// degrade to an empty definition and report it.
    ///
    /// [`DefinitionUnreadable`]: crate::application::ApplicationError::DefinitionUnreadable
    fn load(&self, name: &str) -> WayfarerResult<Option<EntityDefinition>>;

    /// Persist an entity definition (pretty-printed JSON).
    fn save(&self, definition: &EntityDefinition) -> WayfarerResult<()>;

    /// Names of all entities with a persisted definition, in file order.
    fn list(&self) -> WayfarerResult<Vec<String>>;

    /// Load the project settings, if the project has been generated before.
    fn load_settings(&self) -> WayfarerResult<Option<ProjectSettings>>;

    /// Persist the project settings.
    fn save_settings(&self, settings: &ProjectSettings) -> WayfarerResult<()>;
}

/// Port for interactive prompts.
///
/// Implemented by:
/// - `wayfarer_adapters::prompter::TerminalPrompter` (dialoguer, production)
/// - `wayfarer_adapters::prompter::ScriptedPrompter` (testing)
///
/// Validators re-ask inline: an implementation must not return until the
/// input passes `validate` (or the user cancels).  Cancellation maps to
/// [`PromptCancelled`].
///
/// [`PromptCancelled`]: crate::application::ApplicationError::PromptCancelled
pub trait Prompter: Send + Sync {
    /// Yes/no question.
    fn confirm(&self, message: &str, default: bool) -> WayfarerResult<bool>;

    /// Free-text question with inline validation and an optional default.
    fn input(
        &self,
        message: &str,
        default: Option<&str>,
        validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> WayfarerResult<String>;

    /// Single choice from a fixed list; returns the selected index.
    fn select(&self, message: &str, items: &[String], default: usize) -> WayfarerResult<usize>;

    /// Multiple choice; returns the selected indices, in list order.
    fn multi_select(&self, message: &str, items: &[String]) -> WayfarerResult<Vec<usize>>;

    /// Show a line of session output (running summaries, progress notes).
    fn report(&self, message: &str);
}
