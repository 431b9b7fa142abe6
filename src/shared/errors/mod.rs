//! Error Types
//!
//! Domain-specific error types and their mapping onto the
//! `{error_code, message}` response body.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Which end of a ride a coordinate pair belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RidePoint {
    Start,
    End,
}

impl std::fmt::Display for RidePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "Start"),
            Self::End => write!(f, "End"),
        }
    }
}

/// Domain-level errors representing rejected input
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0} latitude and longitude must be between -90 - 90 and -180 to 180 degrees respectively")]
    CoordinatesOutOfRange(RidePoint),

    #[error("{0} must be a non empty string")]
    EmptyField(&'static str),

    #[error("{0}")]
    InvalidPagination(String),
}

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("{0}")]
    Validation(String),

    #[error("Could not find any rides")]
    RidesNotFound,

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError {
    /// Get the HTTP status code for this error under the strict status policy
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Domain(_) => StatusCode::BAD_REQUEST,
            Self::RidesNotFound => StatusCode::NOT_FOUND,
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) | Self::Domain(_) => "VALIDATION_ERROR",
            Self::RidesNotFound => "RIDES_NOT_FOUND_ERROR",
            Self::Repository(_) => "SERVER_ERROR",
        }
    }

    /// Message safe to show to a client. Storage details never leave the process.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::Repository(_) => "Unknown error".to_string(),
            other => other.to_string(),
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Request body must be a JSON object")]
    InvalidBody(String),
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_code: String,
    pub message: String,
}

/// Error code attached to the extensions of every error response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCode(pub &'static str);

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            ApiError::UseCase(uc_error) => {
                (uc_error.status_code(), uc_error.error_code(), uc_error.client_message())
            }
            ApiError::InvalidBody(_) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", self.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::UseCase(UseCaseError::Repository(err)) => {
                tracing::error!(error = %err, "Storage operation failed");
            }
            ApiError::InvalidBody(detail) => {
                tracing::warn!(detail = %detail, "Rejected malformed request body");
            }
            ApiError::UseCase(_) => {}
        }

        let (status, code, message) = self.parts();
        let body = ErrorResponse {
            error_code: code.to_string(),
            message,
        };

        let mut response = (status, Json(body)).into_response();
        response.extensions_mut().insert(ErrorCode(code));
        response
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::UseCase(UseCaseError::Domain(err))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::warn!(detail = %rejection.body_text(), "Rejected malformed query string");
        ApiError::UseCase(UseCaseError::Validation(
            "page and limit must be positive integers".to_string(),
        ))
    }
}

impl ApiError {
    /// Report the first failing field, checking fields in `field_order`
    ///
    /// Fields missing from `field_order` come after it, sorted by name.
    #[must_use]
    pub fn from_validation(errors: &validator::ValidationErrors, field_order: &[&str]) -> Self {
        let fields = errors.field_errors();

        let mut names: Vec<&str> = fields.keys().map(|name| &**name).collect();
        names.sort_by_key(|name| {
            (
                field_order.iter().position(|f| f == name).unwrap_or(field_order.len()),
                *name,
            )
        });

        let message = names
            .first()
            .and_then(|name| {
                fields.get(*name).and_then(|errs| errs.first()).map(|e| {
                    e.message
                        .as_ref()
                        .map_or_else(|| format!("{name} is invalid"), ToString::to_string)
                })
            })
            .unwrap_or_else(|| "Request is invalid".to_string());

        ApiError::UseCase(UseCaseError::Validation(message))
    }
}
