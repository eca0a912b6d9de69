//! Server infrastructure module.
//!
//! - Router assembly with OpenAPI viewers and cross-cutting middleware
//! - Health endpoint
//! - Graceful shutdown
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::{server::ServerConfig, app_info};
//!
//! let router = create_router::<ApiDoc>(api_routes, health_router(app_info!()), &cors);
//! create_app(router, &ServerConfig::default(), Duration::from_secs(30)).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_app, create_router};
pub use health::{HealthResponse, health_router};
pub use shutdown::shutdown_signal;
