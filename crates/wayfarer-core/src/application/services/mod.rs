//! Application services — use case orchestration.

pub mod entity_service;
pub mod scaffold_service;
pub mod session;

pub use entity_service::{EntityOptions, EntityService, GenerationReport, SessionMode};
pub use scaffold_service::{AppOptions, AppReport, ScaffoldService, TemplateFile};
pub use session::PromptSession;
