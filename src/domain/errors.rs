//! Domain-specific error types

use thiserror::Error;

/// Domain-level errors for developer records
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid developer ID: '{id}'")]
    InvalidId { id: String },

    #[error("Invalid input for field {field}: {message}")]
    InvalidInput { field: String, message: String },
}

impl DomainError {
    pub(crate) fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        DomainError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}
