//! API routes module

pub mod products;
pub mod users;

use axum::{middleware, Router};
use axum_helpers::require_bearer;

use crate::state::AppState;

/// Create all API routes, every one behind the bearer-token gate
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .nest("/users", users::router(state))
        .route_layer(middleware::from_fn_with_state(
            state.auth.clone(),
            require_bearer,
        ))
}
