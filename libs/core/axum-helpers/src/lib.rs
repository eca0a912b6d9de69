//! # Axum Helpers
//!
//! Shared building blocks for the CRM HTTP services.
//!
//! ## Modules
//!
//! - **[`auth`]**: HS256 bearer-token gate
//! - **[`server`]**: Router assembly, health endpoint, graceful shutdown
//! - **[`http`]**: HTTP middleware (CORS, security headers)
//! - **[`errors`]**: `{ "error": ... }` responses and the [`AppError`] type
//! - **[`extractors`]**: JSON extractors that reject with [`AppError`]
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::{CorsConfig, server::{create_app, create_router}};
//! use core_config::server::ServerConfig;
//! use std::time::Duration;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let router = create_router::<ApiDoc>(Router::new(), Router::new(), &CorsConfig::default());
//!     create_app(router, &ServerConfig::default(), Duration::from_secs(30)).await
//! }
//! ```

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use auth::{AuthError, JwtAuth, JwtClaims, JwtConfig, require_bearer};
pub use server::{HealthResponse, create_app, create_router, health_router, shutdown_signal};
pub use http::{CorsConfig, create_cors_layer, security_headers};
pub use errors::{AppError, ErrorResponse};
pub use extractors::{JsonBody, ValidatedJson};
