//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store selection and shared handles
//! - `routes/`: HTTP handlers, one file per resource
//! - `dto.rs`: request/response bodies
//! - `extract.rs`: JSON/query extractors with JSON rejections
//! - `errors.rs`: consistent error responses

use std::sync::Arc;
use std::time::Duration;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use hotelier_infra::{AppConfig, StoreResult};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod extract;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub async fn build_app(config: &AppConfig) -> StoreResult<Router> {
    let services = services::build_services(config).await?;
    Ok(router(Arc::new(services), config.request_timeout))
}

/// Router over already-built services.
pub fn router(services: Arc<AppServices>, request_timeout: Duration) -> Router {
    let auth_state = middleware::AuthState {
        jwt: services.jwt_validator(),
    };

    // Admin routes: auth runs only for matched routes, so unknown paths still 404.
    let admin = routes::admin_router().route_layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::auth_middleware,
    ));

    Router::new()
        .merge(routes::public_router())
        .merge(admin)
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::log_requests))
                .layer(axum::middleware::from_fn_with_state(
                    request_timeout,
                    middleware::with_timeout,
                ))
                .layer(Extension(services)),
        )
}

async fn not_found() -> errors::ApiError {
    errors::ApiError::NotFound("route not found".to_string())
}
