//! Domain-layer errors.

use thiserror::Error;

/// Errors produced by pure domain logic.
///
/// All errors are cloneable and categorizable for CLI display.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The entity name failed validation (charset, reserved word, suffix).
    #[error("Invalid entity name '{name}': {reason}")]
    InvalidEntityName { name: String, reason: String },

    /// A field definition violates an entity invariant.
    #[error("Invalid field '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    /// A relationship definition violates an entity invariant.
    #[error("Invalid relationship '{relationship}': {reason}")]
    InvalidRelationship {
        relationship: String,
        reason: String,
    },

    /// A splice target does not contain the expected marker line.
    #[error("marker '{marker}' not found")]
    MarkerNotFound { marker: String },
}

impl DomainError {
    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidEntityName { .. }
            | Self::InvalidField { .. }
            | Self::InvalidRelationship { .. } => ErrorCategory::Validation,
            Self::MarkerNotFound { .. } => ErrorCategory::NotFound,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidEntityName { name, reason } => vec![
                format!("Entity name '{}' was rejected: {}", name, reason),
                "Use alphanumeric characters and underscores only".into(),
            ],
            Self::InvalidField { field, reason } => {
                vec![format!("Field '{}' was rejected: {}", field, reason)]
            }
            Self::InvalidRelationship {
                relationship,
                reason,
            } => vec![format!(
                "Relationship '{}' was rejected: {}",
                relationship, reason
            )],
            Self::MarkerNotFound { marker } => vec![
                format!("The file does not contain the marker line '{}'", marker),
                "Re-run 'wayfarer app' to regenerate the shared files".into(),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
