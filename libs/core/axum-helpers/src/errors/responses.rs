//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({ "error": "Something went wrong!" })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - missing or out-of-domain field",
    content_type = "application/json",
    example = json!({ "error": "All fields are required" })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unauthorized - no bearer token supplied",
    content_type = "application/json",
    example = json!({ "error": "Access token required" })
)]
pub struct UnauthorizedResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Forbidden - bearer token rejected",
    content_type = "application/json",
    example = json!({ "error": "Invalid or expired token" })
)]
pub struct ForbiddenResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Not Found",
    content_type = "application/json",
    example = json!({ "error": "Product not found" })
)]
pub struct NotFoundResponse(pub ErrorResponse);
