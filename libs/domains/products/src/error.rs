use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, errors::validation_message};
use thiserror::Error;
use validator::ValidationErrors;

pub const NOT_FOUND: &str = "Product not found";
pub const REQUIRED_FIELDS: &str = "All fields are required";
pub const NON_NEGATIVE: &str = "Price and stock must be non-negative";

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<ValidationErrors> for ProductError {
    fn from(errors: ValidationErrors) -> Self {
        ProductError::InvalidInput(validation_message(&errors))
    }
}

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => AppError::NotFound(NOT_FOUND.to_string()),
            ProductError::InvalidInput(msg) => AppError::BadRequest(msg),
            ProductError::Unexpected(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
