use super::config::JwtConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,  // Subject (user ID or username)
    pub role: String, // "user" | "admin"
    pub exp: i64,     // Expiration time
    pub iat: i64,     // Issued at
    pub jti: String,  // Token ID
}

/// Stateless HS256 token issuer/verifier backing the bearer gate.
#[derive(Clone)]
pub struct JwtAuth {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
}

impl JwtAuth {
    pub fn new(config: &JwtConfig) -> Self {
        tracing::info!(ttl_secs = config.ttl_secs, "JWT auth initialized");
        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            ttl_secs: config.ttl_secs,
        }
    }

    /// Sign a token for `subject` carrying `role`.
    pub fn issue_token(&self, subject: &str, role: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: subject.to_string(),
            role: role.to_string(),
            exp: (now + Duration::seconds(self.ttl_secs)).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?;
        Ok(token)
    }

    /// Verify signature and expiry, returning the decoded claims.
    pub fn verify_token(&self, token: &str) -> Result<JwtClaims, AuthError> {
        let token_data =
            decode::<JwtClaims>(token, &self.decoding, &Validation::new(Algorithm::HS256))?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> JwtAuth {
        JwtAuth::new(&JwtConfig::new("unit-test-secret-that-is-32-chars-long").unwrap())
    }

    #[test]
    fn test_issue_and_verify() {
        let auth = auth();
        let token = auth.issue_token("jane_smith", "admin").unwrap();
        let claims = auth.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "jane_smith");
        assert_eq!(claims.role, "admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_rejects_foreign_signature() {
        let other =
            JwtAuth::new(&JwtConfig::new("another-secret-that-is-also-32-chars").unwrap());
        let token = other.issue_token("mallory", "admin").unwrap();
        assert!(auth().verify_token(&token).is_err());
    }

    #[test]
    fn test_rejects_expired_token() {
        let config = JwtConfig::new("unit-test-secret-that-is-32-chars-long")
            .unwrap()
            .with_ttl_secs(-3600);
        let auth = JwtAuth::new(&config);
        let token = auth.issue_token("john_doe", "user").unwrap();
        assert!(auth.verify_token(&token).is_err());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(auth().verify_token("not-a-jwt").is_err());
    }
}
