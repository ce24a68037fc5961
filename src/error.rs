//! Error types and HTTP response conversion

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::repository::RepositoryError;

/// Result type alias using the service error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the service
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// Failed to establish the store connection at startup (fatal)
    #[error("Failed to connect to database at {host}:{port}/{name}: {source}")]
    Connect {
        host: String,
        port: u16,
        name: String,
        source: Box<sqlx::Error>,
    },

    /// Store failure during a request; `public` is the client-visible message
    #[error("{public}")]
    Store {
        public: &'static str,
        source: Box<sqlx::Error>,
    },

    /// Metrics recorder setup error
    #[error("Metrics error: {0}")]
    Metrics(String),

    /// Request validation failed (400)
    #[error("{0}")]
    Validation(String),

    /// Unique constraint conflict (409)
    #[error("{0}")]
    Conflict(String),

    /// Resource not found (404)
    #[error("{0}")]
    NotFound(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Translate a repository error at the handler boundary.
    ///
    /// Duplicate-key violations become 409; anything else is a store failure
    /// answered with `public` and a 500. Raw driver detail never reaches the
    /// client.
    pub fn store(err: RepositoryError, public: &'static str) -> Self {
        match err {
            RepositoryError::DuplicateEmail => Error::Conflict("Email already exists".to_string()),
            RepositoryError::Sqlx(source) => Error::Store {
                public,
                source: Box::new(source),
            },
        }
    }
}

/// Error response body: always a single `error` string field
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Error::Validation(msg) => (StatusCode::BAD_REQUEST, msg),

            Error::Conflict(msg) => (StatusCode::CONFLICT, msg),

            Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg),

            Error::Store { public, source } => {
                tracing::error!(error = %source, "{}", public);
                (StatusCode::INTERNAL_SERVER_ERROR, public.to_string())
            }

            // Startup-only errors, mapped defensively if one ever surfaces
            // through a handler
            other => {
                tracing::error!(error = %other, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let response = Error::Validation("Name and email are required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_conflict_maps_to_409() {
        let response = Error::Conflict("Email already exists".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = Error::NotFound("User not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_failure_maps_to_500_with_public_message() {
        let err = Error::store(
            RepositoryError::Sqlx(sqlx::Error::PoolClosed),
            "Failed to fetch users",
        );
        assert_eq!(err.to_string(), "Failed to fetch users");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_duplicate_email_translates_to_conflict() {
        let err = Error::store(RepositoryError::DuplicateEmail, "Failed to create user");
        assert!(matches!(err, Error::Conflict(_)));
        assert_eq!(err.to_string(), "Email already exists");
    }

    #[test]
    fn test_error_response_body_shape() {
        let body = serde_json::to_value(ErrorResponse::new("Route not found")).unwrap();
        assert_eq!(body, serde_json::json!({"error": "Route not found"}));
    }
}
