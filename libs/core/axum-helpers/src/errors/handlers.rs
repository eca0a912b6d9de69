use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::any::Any;

use super::{ErrorResponse, GENERIC_INTERNAL_ERROR};

/// Fallback handler for routes that do not exist.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Route not found")),
    )
        .into_response()
}

/// Converts a panic escaping a handler into a generic 500 response.
///
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(GENERIC_INTERNAL_ERROR)),
    )
        .into_response()
}
