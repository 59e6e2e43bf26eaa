use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("{0}")]
    InvalidParameter(String),
    #[error("failed to read data file")]
    DataStoreError(#[source] std::io::Error),
    #[error("failed to parse data file")]
    MalformedDataError(#[from] serde_json::Error),
    #[error("invalid email or password")]
    UnauthenticatedError,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match &self {
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) | AppError::InvalidParameter(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::UnauthenticatedError => StatusCode::UNAUTHORIZED,
            e @ (AppError::DataStoreError(_) | AppError::MalformedDataError(_)) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Unexpected error happened"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status_code, self.to_string()).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
