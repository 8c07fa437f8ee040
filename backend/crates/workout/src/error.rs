//! Workout Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type WorkoutResult<T> = Result<T, WorkoutError>;

#[derive(Debug, Error)]
pub enum WorkoutError {
    /// Missing or out-of-range input
    #[error("{0}")]
    Validation(String),

    /// Absent, owned by someone else, or not a valid id
    #[error("Workout not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl WorkoutError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            WorkoutError::Validation(_) => StatusCode::BAD_REQUEST,
            WorkoutError::NotFound => StatusCode::NOT_FOUND,
            WorkoutError::Database(_) | WorkoutError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            WorkoutError::Validation(_) => ErrorKind::BadRequest,
            WorkoutError::NotFound => ErrorKind::NotFound,
            WorkoutError::Database(_) | WorkoutError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    fn log(&self) {
        match self {
            WorkoutError::Database(e) => {
                tracing::error!(error = %e, "Workout database error");
            }
            WorkoutError::Internal(msg) => {
                tracing::error!(message = %msg, "Workout internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Workout error");
            }
        }
    }
}

impl IntoResponse for WorkoutError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for WorkoutError {
    fn from(err: AppError) -> Self {
        if err.is_client_error() {
            WorkoutError::Validation(err.message().to_string())
        } else {
            WorkoutError::Internal(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            WorkoutError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(WorkoutError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            WorkoutError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_from_app_error() {
        let err: WorkoutError = AppError::bad_request("Intensity must be between 1 and 10").into();
        assert!(matches!(err, WorkoutError::Validation(ref m) if m == "Intensity must be between 1 and 10"));

        let err: WorkoutError = AppError::internal("disk on fire").into();
        assert!(matches!(err, WorkoutError::Internal(_)));
    }

    #[test]
    fn test_internal_detail_is_not_public() {
        let app = WorkoutError::Internal("secret".into()).to_app_error();
        assert!(!app.public_message().contains("secret"));
    }
}
