use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Errors raised by the productos domain.
///
/// Absence of a producto is not an error here. Lookups return
/// `Ok(None)` and the HTTP layer decides what absence means.
#[derive(Debug, Error)]
pub enum ProductoError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductoResult<T> = Result<T, ProductoError>;

/// Convert ProductoError to AppError for standardized error responses
impl From<ProductoError> for AppError {
    fn from(err: ProductoError) -> Self {
        match err {
            ProductoError::Database(msg) => AppError::Database(msg),
            ProductoError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductoError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ProductoError {
    fn from(err: mongodb::error::Error) -> Self {
        ProductoError::Database(err.to_string())
    }
}
