//! Bearer-token authentication.
//!
//! - [`JwtConfig`]: secret and token lifetime from the environment
//! - [`JwtAuth`]: HS256 token issue/verify
//! - [`require_bearer`]: middleware guarding protected routes
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{JwtAuth, JwtConfig, require_bearer};
//! use core_config::FromEnv;
//!
//! let auth = JwtAuth::new(&JwtConfig::from_env()?);
//! let protected = Router::new()
//!     .route("/api/protected", get(handler))
//!     .route_layer(axum::middleware::from_fn_with_state(auth, require_bearer));
//! ```

pub mod config;
pub mod jwt;
pub mod middleware;

pub use config::JwtConfig;
pub use jwt::{AuthError, JwtAuth, JwtClaims};
pub use middleware::require_bearer;
