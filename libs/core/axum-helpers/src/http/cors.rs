use axum::http::{HeaderValue, Method, header};
use core_config::{ConfigError, FromEnv, env_or_default};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Origin the dashboard is served from during local development.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Allowed CORS origins.
///
/// Read from `CORS_ALLOWED_ORIGIN` (comma-separated), defaulting to
/// `http://localhost:3000`.
#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<HeaderValue>,
}

impl CorsConfig {
    /// Parse a comma-separated origin list; blank entries are skipped.
    pub fn parse(origins: &str) -> Result<Self, ConfigError> {
        let allowed_origins = origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(HeaderValue::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: e.to_string(),
            })?;

        if allowed_origins.is_empty() {
            return Err(ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: "at least one origin is required".to_string(),
            });
        }

        Ok(Self { allowed_origins })
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN)],
        }
    }
}

impl FromEnv for CorsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Self::parse(&env_or_default("CORS_ALLOWED_ORIGIN", DEFAULT_ALLOWED_ORIGIN))
    }
}

/// Creates a CORS layer with common settings for API services.
///
/// - Specified allowed origins
/// - Methods: GET, POST, PUT, DELETE, OPTIONS
/// - Headers: Content-Type, Authorization, Accept
/// - Credentials allowed, 1 hour max age
pub fn create_cors_layer(config: &CorsConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.allowed_origins.clone()))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_multiple_origins() {
        let config =
            CorsConfig::parse("http://localhost:3000, https://crm.example.com ,").unwrap();
        assert_eq!(config.allowed_origins.len(), 2);
        assert_eq!(config.allowed_origins[1], "https://crm.example.com");
    }

    #[test]
    fn test_parse_rejects_empty_list() {
        assert!(CorsConfig::parse(" , ").is_err());
    }

    #[test]
    fn test_from_env_defaults_to_localhost() {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            let config = CorsConfig::from_env().unwrap();
            assert_eq!(
                config.allowed_origins,
                vec![HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN)]
            );
        });
    }
}
