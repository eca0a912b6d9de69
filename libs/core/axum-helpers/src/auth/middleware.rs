use super::jwt::JwtAuth;
use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};

/// Extract the token from `Authorization: Bearer <token>`.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Bearer-token gate.
///
/// No token yields 401, a token that fails verification yields 403. On
/// success the decoded [`JwtClaims`](super::JwtClaims) are inserted into the
/// request extensions.
///
/// ```ignore
/// let protected = Router::new()
///     .nest("/products", products)
///     .route_layer(axum::middleware::from_fn_with_state(auth, require_bearer));
/// ```
pub async fn require_bearer(
    State(auth): State<JwtAuth>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = bearer_token(request.headers()) else {
        tracing::debug!("No bearer token in Authorization header");
        return Err(AppError::Unauthorized("Access token required".to_string()));
    };

    let claims = auth.verify_token(token).map_err(|e| {
        tracing::debug!("JWT verification failed: {}", e);
        AppError::Forbidden("Invalid or expired token".to_string())
    })?;

    tracing::debug!(subject = %claims.sub, role = %claims.role, "Bearer token accepted");
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{JwtClaims, JwtConfig};
    use axum::{
        Extension, Router, body::Body, http::StatusCode, middleware::from_fn_with_state,
        routing::get,
    };
    use tower::ServiceExt;

    fn auth() -> JwtAuth {
        JwtAuth::new(&JwtConfig::new("middleware-test-secret-32-characters").unwrap())
    }

    fn app(auth: JwtAuth) -> Router {
        Router::new()
            .route(
                "/whoami",
                get(|Extension(claims): Extension<JwtClaims>| async move { claims.sub }),
            )
            .route_layer(from_fn_with_state(auth, require_bearer))
    }

    fn request(authorization: Option<&str>) -> axum::http::Request<Body> {
        let mut builder = axum::http::Request::builder().uri("/whoami");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_missing_token_is_401() {
        let response = app(auth()).oneshot(request(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_is_401() {
        let response = app(auth())
            .oneshot(request(Some("Basic dXNlcjpwYXNz")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_invalid_token_is_403() {
        let response = app(auth())
            .oneshot(request(Some("Bearer definitely.not.valid")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_valid_token_reaches_handler_with_claims() {
        let auth = auth();
        let token = auth.issue_token("sarah_jones", "admin").unwrap();
        let header_value = format!("Bearer {token}");

        let response = app(auth)
            .oneshot(request(Some(&header_value)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = http_body_util::BodyExt::collect(response.into_body())
            .await
            .unwrap()
            .to_bytes();
        assert_eq!(&bytes[..], b"sarah_jones");
    }
}
