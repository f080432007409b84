use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use hotelier_auth::JwtValidator;

use crate::app::errors::ApiError;
use crate::context::PrincipalContext;

#[derive(Clone)]
pub struct AuthState {
    /// `None` disables admin auth: every request acts as admin.
    pub jwt: Option<Arc<dyn JwtValidator>>,
}

/// Authenticate admin routes and attach the [`PrincipalContext`].
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let principal = match &state.jwt {
        None => PrincipalContext::unauthenticated_admin(),
        Some(jwt) => {
            let token = extract_bearer(req.headers())?;
            let claims = jwt.validate(token, Utc::now())?;
            PrincipalContext::new(claims.sub, claims.roles)
        }
    };

    req.extensions_mut().insert(principal);
    Ok(next.run(req).await)
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, ApiError> {
    let missing = || ApiError::Unauthorized("missing bearer token".to_string());

    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or_else(missing)?;
    let header = header.to_str().map_err(|_| missing())?;
    let token = header.strip_prefix("Bearer ").ok_or_else(missing)?.trim();

    if token.is_empty() {
        return Err(missing());
    }
    Ok(token)
}

/// One `info!` line per request.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        latency_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    response
}

/// Fail requests that outlive `timeout`.
pub async fn with_timeout(State(timeout): State<Duration>, req: Request, next: Next) -> Response {
    match tokio::time::timeout(timeout, next.run(req)).await {
        Ok(response) => response,
        Err(_) => {
            tracing::warn!(timeout_ms = timeout.as_millis() as u64, "request timed out");
            ApiError::Timeout.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_token_is_extracted() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(extract_bearer(&headers).unwrap(), "abc.def");
    }

    #[test]
    fn other_schemes_are_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Basic Zm9vOmJhcg=="));
        assert!(matches!(extract_bearer(&headers), Err(ApiError::Unauthorized(_))));

        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer   "));
        assert!(matches!(extract_bearer(&headers), Err(ApiError::Unauthorized(_))));

        assert!(matches!(extract_bearer(&HeaderMap::new()), Err(ApiError::Unauthorized(_))));
    }
}
