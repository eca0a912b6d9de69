//! CRM API - REST server

use axum_helpers::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use crm_api::{build_app, config::Config};
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let server = config.server.clone();
    let shutdown_timeout = config.shutdown_timeout;
    info!(
        "Starting {} v{} on port {}",
        config.app.name, config.app.version, server.port
    );

    let app = build_app(config);
    create_app(app, &server, shutdown_timeout)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("CRM API shutdown complete");
    Ok(())
}
