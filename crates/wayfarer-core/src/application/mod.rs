//! Application layer for Wayfarer.
//!
//! This layer contains:
//! - **Services**: use case orchestration (EntityService, ScaffoldService)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself.  All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    AppOptions, AppReport, EntityOptions, EntityService, GenerationReport, PromptSession,
    ScaffoldService, SessionMode, TemplateFile,
};

// Re-export port traits (for adapter implementation)
pub use ports::{EntityStore, Filesystem, Prompter};

pub use error::ApplicationError;
