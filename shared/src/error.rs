use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("{0}")]
    PersistenceError(String),
    #[error("transaction could not be executed")]
    TransactionError(#[source] sqlx::Error),
    #[error("an error occurred while running a database operation")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("{0}")]
    KeyValueStoreError(#[from] redis::RedisError),
    #[error("{0}")]
    BcryptError(#[from] bcrypt::BcryptError),
    #[error("{0}")]
    ConvertToUuidError(#[from] uuid::Error),
    #[error("authentication required")]
    UnauthenticatedError,
    #[error("invalid credentials")]
    UnauthorizedError,
    #[error("{0}")]
    ConversionEntityError(String),
}

impl AppError {
    /// Wraps a rejected write, keeping the store's own message.
    pub fn persistence(action: &str, source: sqlx::Error) -> Self {
        let message = match &source {
            sqlx::Error::Database(db) => db.message().to_string(),
            other => other.to_string(),
        };
        Self::PersistenceError(format!("Failed to {action}: {message}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match &self {
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_)
            | AppError::PersistenceError(_)
            | AppError::ConvertToUuidError(_) => StatusCode::BAD_REQUEST,
            AppError::UnauthenticatedError | AppError::UnauthorizedError => {
                StatusCode::UNAUTHORIZED
            }
            e @ (AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::KeyValueStoreError(_)
            | AppError::BcryptError(_)
            | AppError::ConversionEntityError(_)) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Unexpected error happened"
                );
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };

        (status_code, self.to_string()).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn persistence_error_body_is_the_message_verbatim() {
        let message = "Failed to delete booking: no booking matched the given id";
        let res = AppError::PersistenceError(message.into()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(body, message.as_bytes());
    }

    #[test]
    fn persistence_wraps_non_database_errors_with_context() {
        let err = AppError::persistence("update booking status", sqlx::Error::RowNotFound);
        let AppError::PersistenceError(message) = err else {
            panic!("expected a persistence error");
        };
        assert!(message.starts_with("Failed to update booking status: "));
    }
}
