pub mod handlers;
pub mod responses;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Message returned for any failure that is not the caller's fault.
pub const GENERIC_INTERNAL_ERROR: &str = "Something went wrong!";

/// Standard error response body.
///
/// ```json
/// { "error": "Product not found" }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Optional structured error details (e.g., validation field errors)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!("JSON extraction error: {:?}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(format!("Invalid request body: {}", e.body_text())),
                )
            }
            AppError::ValidationError(e) => {
                tracing::info!("Validation error: {:?}", e);
                let details = serde_json::to_value(&e).ok();
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: validation_message(&e),
                        details,
                    },
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, ErrorResponse::new(msg))
            }
            AppError::Unauthorized(msg) => {
                tracing::info!("Unauthorized: {}", msg);
                (StatusCode::UNAUTHORIZED, ErrorResponse::new(msg))
            }
            AppError::Forbidden(msg) => {
                tracing::info!("Forbidden: {}", msg);
                (StatusCode::FORBIDDEN, ErrorResponse::new(msg))
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, ErrorResponse::new(msg))
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(GENERIC_INTERNAL_ERROR),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Pick one message that summarizes a set of validation failures.
///
/// Presence failures (`required`, then `length`) win over domain failures such
/// as `range`; ties are broken by field name so the result is deterministic.
/// The custom `message` of the chosen error is used when one was declared.
pub fn validation_message(errors: &ValidationErrors) -> String {
    fn rank(code: &str) -> u8 {
        match code {
            "required" => 0,
            "length" => 1,
            _ => 2,
        }
    }

    let mut candidates: Vec<(u8, &str, String)> = Vec::new();
    for (field, kind) in errors.errors() {
        if let ValidationErrorsKind::Field(field_errors) = kind {
            for err in field_errors {
                let text = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{}: {}", field, err.code));
                candidates.push((rank(&err.code), field.as_ref(), text));
            }
        }
    }

    candidates
        .into_iter()
        .min_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)))
        .map(|(_, _, text)| text)
        .unwrap_or_else(|| "Request validation failed".to_string())
}
