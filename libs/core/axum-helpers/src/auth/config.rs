//! JWT configuration loaded through `core_config::FromEnv`.

use core_config::{ConfigError, FromEnv, env_parse, env_required};

/// Minimum accepted length of the signing secret.
pub const MIN_SECRET_LEN: usize = 32;

/// Default token lifetime: 24 hours.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// JWT authentication configuration.
///
/// Loaded from environment variables:
/// - `JWT_SECRET` (required) - at least 32 characters
/// - `JWT_TTL_SECS` (optional) - lifetime of issued tokens, default 86400
#[derive(Clone, Debug)]
pub struct JwtConfig {
    /// HS256 signing secret
    pub secret: String,
    /// Lifetime of issued tokens in seconds
    pub ttl_secs: i64,
}

impl JwtConfig {
    /// Build a config from an explicit secret (tests, CLI tooling).
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        check_secret(&secret)?;
        Ok(Self {
            secret,
            ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        })
    }

    pub fn with_ttl_secs(mut self, ttl_secs: i64) -> Self {
        self.ttl_secs = ttl_secs;
        self
    }
}

impl FromEnv for JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("JWT_SECRET")?;
        check_secret(&secret)?;
        let ttl_secs = env_parse("JWT_TTL_SECS", DEFAULT_TOKEN_TTL_SECS)?;

        Ok(Self { secret, ttl_secs })
    }
}

fn check_secret(secret: &str) -> Result<(), ConfigError> {
    if secret.len() < MIN_SECRET_LEN {
        return Err(ConfigError::ParseError {
            key: "JWT_SECRET".to_string(),
            details: format!(
                "must be at least {} characters (got {}). Generate one with: openssl rand -base64 32",
                MIN_SECRET_LEN,
                secret.len()
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "this-is-a-valid-secret-with-32-chars!";

    #[test]
    fn test_jwt_config_new_valid() {
        let config = JwtConfig::new(SECRET).unwrap();
        assert_eq!(config.secret, SECRET);
        assert_eq!(config.ttl_secs, DEFAULT_TOKEN_TTL_SECS);
    }

    #[test]
    fn test_jwt_config_new_too_short() {
        let err = JwtConfig::new("short").unwrap_err();
        assert!(err.to_string().contains("JWT_SECRET"));
    }

    #[test]
    fn test_jwt_config_from_env_valid() {
        temp_env::with_vars(
            [("JWT_SECRET", Some(SECRET)), ("JWT_TTL_SECS", Some("60"))],
            || {
                let config = JwtConfig::from_env().unwrap();
                assert_eq!(config.secret, SECRET);
                assert_eq!(config.ttl_secs, 60);
            },
        );
    }

    #[test]
    fn test_jwt_config_from_env_missing() {
        temp_env::with_var_unset("JWT_SECRET", || {
            let err = JwtConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("JWT_SECRET"));
        });
    }

    #[test]
    fn test_jwt_config_from_env_too_short() {
        temp_env::with_var("JWT_SECRET", Some("short"), || {
            let err = JwtConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("32 characters"));
        });
    }
}
