use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, errors::validation_message};
use thiserror::Error;
use validator::ValidationErrors;

pub const NOT_FOUND: &str = "User not found";
pub const REQUIRED_FIELDS: &str = "Username and email are required";

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<ValidationErrors> for UserError {
    fn from(errors: ValidationErrors) -> Self {
        UserError::InvalidInput(validation_message(&errors))
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => AppError::NotFound(NOT_FOUND.to_string()),
            UserError::InvalidInput(msg) => AppError::BadRequest(msg),
            UserError::Unexpected(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
