//! Maps domain failures onto HTTP statuses and problem-details bodies.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blogroll_core::DomainError;
use blogroll_core::error::RepoError;
use blogroll_core::ports::AuthError;
use blogroll_shared::ErrorResponse;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Auth(AuthError::MissingToken | AuthError::InvalidToken(_)) => {
                StatusCode::UNAUTHORIZED
            }
            AppError::Auth(AuthError::Forbidden) => StatusCode::FORBIDDEN,
            AppError::Auth(AuthError::Signing(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Validation(detail) => ErrorResponse::bad_request(detail),
            AppError::Auth(AuthError::MissingToken) => ErrorResponse::missing_token(),
            AppError::Auth(AuthError::InvalidToken(msg)) => ErrorResponse::invalid_token(msg),
            AppError::Auth(e @ AuthError::Forbidden) => ErrorResponse::forbidden(e.to_string()),
            AppError::Conflict(detail) => ErrorResponse::conflict(detail),
            AppError::Auth(AuthError::Signing(detail)) | AppError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed with an internal error");
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Auth(e) => AppError::Auth(e),
            DomainError::Validation(e) => AppError::Validation(e.to_string()),
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            DomainError::Storage(e) => e.into(),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".to_string()),
            RepoError::Constraint(msg) => AppError::Conflict(msg),
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
