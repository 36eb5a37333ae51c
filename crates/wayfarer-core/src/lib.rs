//! Wayfarer Core — hexagonal architecture implementation.
//!
//! This crate provides the domain and application layers for the Wayfarer
//! scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          wayfarer-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (EntityService, ScaffoldService)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (EntityStore, Filesystem, Prompter)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//! ┌─────────────────────────────────────────┐
//! │    wayfarer-adapters (Infrastructure)   │
//! └─────────────────────────────────────────┘
//!                    │
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (EntityDefinition, naming, splice,     │
//! │   validation, artifact rendering)       │
//! └─────────────────────────────────────────┘
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AppOptions, AppReport, EntityOptions, EntityService, GenerationReport, PromptSession,
        ScaffoldService, SessionMode, TemplateFile,
        ports::{EntityStore, Filesystem, Prompter},
    };
    pub use crate::domain::{
        BlobContent, EntityDefinition, Field, FieldType, ProjectContext, ProjectSettings,
        Relationship, RelationshipType, ValidateRule,
    };
    pub use crate::error::{WayfarerError, WayfarerResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
