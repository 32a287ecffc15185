use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),
    #[error(transparent)]
    PathRejection(#[from] PathRejection),
    #[error(transparent)]
    QueryRejection(#[from] QueryRejection),
    #[error("transaction could not be executed")]
    TransactionError(#[source] sqlx::Error),
    #[error("an error occurred while running a database operation")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("no rows affected: {0}")]
    NoRowsAffectedError(String),
    #[error("{0}")]
    ConversionEntityError(String),
    #[error("{message}")]
    OperationFailed {
        message: &'static str,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    fn is_internal(&self) -> bool {
        matches!(
            self,
            AppError::TransactionError(_)
                | AppError::SpecificOperationError(_)
                | AppError::NoRowsAffectedError(_)
                | AppError::ConversionEntityError(_)
                | AppError::OperationFailed { .. }
        )
    }

    /// Replaces the generic 500 message with one naming the failed operation.
    /// Client errors pass through unchanged.
    pub fn on_failure(self, message: &'static str) -> Self {
        if self.is_internal() {
            AppError::OperationFailed {
                message,
                source: Box::new(self),
            }
        } else {
            self
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status_code, message) = match self {
            AppError::EntityNotFound(msg) => (StatusCode::NOT_FOUND, msg),
            e @ AppError::ValidationError(_) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::JsonRejection(rejection) => (rejection.status(), rejection.body_text()),
            AppError::PathRejection(rejection) => (rejection.status(), rejection.body_text()),
            AppError::QueryRejection(rejection) => (rejection.status(), rejection.body_text()),
            e => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Unexpected error happened"
                );
                let message = match e {
                    AppError::OperationFailed { message, .. } => message.to_string(),
                    _ => "internal server error".to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status_code, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
