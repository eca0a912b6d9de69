//! CRM API - REST server for the admin console
//!
//! Products and users live in process memory and are reset on restart.
//! Everything under `/api` requires `Authorization: Bearer <jwt>`.

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::{routing::get, Router};
use axum_helpers::{create_router, health_router};

use config::Config;
use state::AppState;

/// Plain-text body served at `/`.
pub const WELCOME: &str = "CRM API is live. Use /health or the /api routes.";

/// Build the complete application router from `config`.
pub fn build_app(config: Config) -> Router {
    let state = AppState::new(config);

    let api_routes = api::routes(&state);
    let public = Router::new()
        .route("/", get(|| async { WELCOME }))
        .merge(health_router(state.config.app));

    create_router::<openapi::ApiDoc>(api_routes, public, &state.config.cors)
}
