//! Application layer errors.
//!
//! These errors represent failures in orchestration — store access, prompt
//! I/O, filesystem writes.  Business-rule violations are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The user chose to abort the session; nothing was written.
    #[error("{message}")]
    Aborted { message: String },

    /// The user cancelled an interactive prompt (Ctrl-C / EOF).
    #[error("Prompt cancelled")]
    PromptCancelled,

    /// Prompt I/O failed for a reason other than cancellation.
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// An entity definition or settings file could not be written.
    #[error("Could not write {path}: {reason}")]
    StoreWriteFailed { path: PathBuf, reason: String },

    /// A persisted definition file exists but is not parseable JSON.
    ///
    /// Callers degrade to an empty definition (the original behavior) and
    /// report the failure; see DESIGN.md.
    #[error("The configuration file {path} could not be read")]
    DefinitionUnreadable { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Aborted { .. } => vec!["No changes were made".into()],
            Self::PromptCancelled => vec!["No changes were made".into()],
            Self::PromptFailed { .. } => {
                vec!["Interactive prompts require a terminal (TTY)".into()]
            }
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::StoreWriteFailed { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::DefinitionUnreadable { path } => vec![
                format!("The file {} is not valid JSON", path.display()),
                "Fix or remove the file and re-run".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Aborted { .. } | Self::PromptCancelled => ErrorCategory::Validation,
            Self::PromptFailed { .. } => ErrorCategory::Internal,
            Self::FilesystemError { .. } | Self::StoreWriteFailed { .. } => ErrorCategory::Internal,
            Self::DefinitionUnreadable { .. } => ErrorCategory::Configuration,
        }
    }
}
