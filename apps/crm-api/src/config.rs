//! Configuration for the CRM API

use axum_helpers::{CorsConfig, JwtConfig};
use core_config::{app_info, env_parse, server::ServerConfig, AppInfo, FromEnv};
use std::time::Duration;

pub use core_config::Environment;

/// Default grace period for in-flight requests after a shutdown signal.
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub jwt: JwtConfig,
    pub cors: CorsConfig,
    /// Load the demo products and users at startup (`SEED_DATA`)
    pub seed_data: bool,
    pub shutdown_timeout: Duration,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let jwt = JwtConfig::from_env()?;
        let cors = CorsConfig::from_env()?;
        let seed_data = env_parse("SEED_DATA", true)?;
        let shutdown_timeout = Duration::from_secs(env_parse(
            "SHUTDOWN_TIMEOUT_SECS",
            DEFAULT_SHUTDOWN_TIMEOUT_SECS,
        )?);

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            jwt,
            cors,
            seed_data,
            shutdown_timeout,
        })
    }
}
