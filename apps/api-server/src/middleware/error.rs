//! Error handling - maps domain errors to HTTP statuses and the
//! `{success: false, message, error?}` failure envelope.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use quill_shared::FailureResponse;
use std::fmt;

/// Application-level error type carried by handlers.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unavailable(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Unavailable(msg) => write!(f, "Store unavailable: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::BadRequest(detail) => FailureResponse::new(detail.clone()),
            AppError::NotFound(detail) => {
                FailureResponse::new("Post not found").with_error(detail.clone())
            }
            AppError::Conflict(detail) => FailureResponse::new(detail.clone()),
            AppError::Unavailable(detail) => {
                // Store details are logged, never echoed to clients.
                tracing::error!("Store error: {}", detail);
                FailureResponse::new("Service temporarily unavailable")
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<quill_core::DomainError> for AppError {
    fn from(err: quill_core::DomainError) -> Self {
        match err {
            quill_core::DomainError::Validation(msg) => AppError::BadRequest(msg),
            quill_core::DomainError::Conflict(msg) => AppError::Conflict(msg),
            quill_core::DomainError::NotFound(msg) => AppError::NotFound(msg),
            quill_core::DomainError::Unavailable(msg) => AppError::Unavailable(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
