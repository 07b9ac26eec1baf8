//! Error handling middleware - translates library errors to HTTP responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use quill_core::error::RepoError;
use quill_shared::{ErrorResponse, ValidationError};

/// Application-level error type rendered as `{"error": "<message>"}`.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::NotFound(msg) => ErrorResponse::new(msg),
            AppError::BadRequest(msg) => ErrorResponse::new(msg),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

// Conversion from library errors
impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::BadRequest(err.0)
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Post not found".to_string()),
            RepoError::Codec(e) => {
                tracing::error!("Tag decode error: {}", e);
                AppError::BadRequest(e.to_string())
            }
            RepoError::Connection(msg) | RepoError::Query(msg) | RepoError::Constraint(msg) => {
                // Storage failures reach the client with the underlying
                // message; they are never retried here.
                tracing::error!("Database error: {}", msg);
                AppError::BadRequest(msg)
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
