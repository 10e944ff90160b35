//! Application layer error types

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::domain::DomainError;

/// Application-level errors
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// A create or update the store refused to apply
    #[error("Store rejected the change: {0}")]
    StoreRejected(#[source] RepositoryError),

    #[error("Invalid request body: {message}")]
    InvalidRequest { message: String },

    #[error("Developer id in body ({body_id}) does not match path ({path_id})")]
    IdMismatch { path_id: String, body_id: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Record store errors
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Developer not found: {id}")]
    NotFound { id: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = match &self {
            ApplicationError::Repository(RepositoryError::Io(_)) => {
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let body = Json(json!({
            "error": {
                "message": error_message,
                "type": self.error_type(),
                "status": status.as_u16()
            }
        }));

        (status, body).into_response()
    }
}

impl ApplicationError {
    /// HTTP status for this error. Every rejected mutation is a 400.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApplicationError::Domain(_) => StatusCode::BAD_REQUEST,
            ApplicationError::Repository(RepositoryError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApplicationError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApplicationError::StoreRejected(_) => StatusCode::BAD_REQUEST,
            ApplicationError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            ApplicationError::IdMismatch { .. } => StatusCode::BAD_REQUEST,
            ApplicationError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error type as a string for API responses
    pub fn error_type(&self) -> &'static str {
        match self {
            ApplicationError::Domain(_) => "domain_error",
            ApplicationError::Repository(_) => "repository_error",
            ApplicationError::StoreRejected(_) => "store_rejected",
            ApplicationError::InvalidRequest { .. } => "invalid_request",
            ApplicationError::IdMismatch { .. } => "id_mismatch",
            ApplicationError::Configuration { .. } => "configuration_error",
        }
    }

    /// Field a validation error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            ApplicationError::Domain(DomainError::InvalidInput { field, .. }) => Some(field),
            ApplicationError::IdMismatch { .. } => Some("id"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_failures_are_bad_request() {
        let rejected = ApplicationError::StoreRejected(RepositoryError::NotFound {
            id: "x".to_string(),
        });
        assert_eq!(rejected.status_code(), StatusCode::BAD_REQUEST);

        let invalid: ApplicationError = DomainError::InvalidInput {
            field: "name".to_string(),
            message: "empty".to_string(),
        }
        .into();
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(invalid.field(), Some("name"));
    }

    #[test]
    fn test_read_failures_are_server_errors() {
        let io = ApplicationError::Repository(RepositoryError::Io(std::io::Error::other("disk")));
        assert_eq!(io.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(io.error_type(), "repository_error");
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let error = ApplicationError::InvalidRequest {
            message: "missing field `skills`".to_string(),
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["type"], "invalid_request");
        assert_eq!(body["error"]["status"], 400);
        assert!(
            body["error"]["message"]
                .as_str()
                .unwrap()
                .contains("skills")
        );
    }
}
