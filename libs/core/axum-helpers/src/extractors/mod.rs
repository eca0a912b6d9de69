//! Custom extractors for Axum handlers.
//!
//! Both extractors reject with [`AppError`](crate::AppError), so a malformed
//! body produces the same `{ "error": ... }` shape as every other failure.

pub mod form_value;
pub mod json_body;
pub mod validated_json;

pub use json_body::JsonBody;
pub use validated_json::ValidatedJson;
