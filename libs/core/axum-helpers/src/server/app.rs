use super::shutdown::shutdown_signal;
use crate::errors::handlers::{not_found, panic_response};
use crate::http::{CorsConfig, create_cors_layer, security_headers};
use axum::{Json, Router, middleware, routing::get};
use core_config::server::ServerConfig;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;

/// Starts the Axum server and shuts it down gracefully on SIGINT/SIGTERM.
///
/// After the signal, in-flight requests get `shutdown_timeout` to finish
/// before the server stops waiting for them.
///
/// # Errors
/// Returns an error if the listener fails to bind or the server fails while
/// running.
pub async fn create_app(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let draining = Arc::new(Notify::new());
    let signal = {
        let draining = Arc::clone(&draining);
        async move {
            shutdown_signal().await;
            draining.notify_one();
        }
    };

    let serve = async move {
        axum::serve(listener, router.into_make_service())
            .with_graceful_shutdown(signal)
            .await
    };

    tokio::select! {
        result = serve => {
            result.inspect_err(|e| tracing::error!("Server encountered an error: {:?}", e))?;
            info!("Server stopped");
        }
        _ = async {
            draining.notified().await;
            tokio::time::sleep(shutdown_timeout).await;
        } => {
            warn!(
                "In-flight requests exceeded shutdown timeout of {:?}, forcing shutdown",
                shutdown_timeout
            );
        }
    }

    Ok(())
}

/// Assembles the public router around the domain routes.
///
/// This sets up:
/// - OpenAPI JSON at `/api-docs/openapi.json` with ReDoc, RapiDoc and Scalar viewers
/// - `apis` nested under `/api`, `public` (health, welcome page) at the root
/// - `{"error": "Route not found"}` fallback
/// - panic catching, request tracing, security headers, CORS and compression
///
/// Domain routers should already have their state (and any auth layer)
/// applied.
pub fn create_router<T>(apis: Router, public: Router, cors: &CorsConfig) -> Router
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};

    let spec = T::openapi();
    info!(
        "CORS configured with allowed origins: {:?}",
        cors.allowed_origins
    );

    Router::new()
        .route(
            "/api-docs/openapi.json",
            get({
                let spec = spec.clone();
                move || async move { Json(spec) }
            }),
        )
        .merge(Redoc::with_url("/redoc", spec.clone()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", spec))
        .nest("/api", apis)
        .merge(public)
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(create_cors_layer(cors))
        .layer(CompressionLayer::new())
}
