//! Consistent `{"error": <message>}` responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use hotelier_auth::TokenError;
use hotelier_core::DomainError;
use hotelier_infra::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed input, lifecycle violation or booking conflict.
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("request timed out")]
    Timeout,

    /// Datastore failure. The detail has already been logged.
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Timeout => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(_) => ApiError::NotFound(err.to_string()),
            DomainError::Validation(_)
            | DomainError::InvalidId(_)
            | DomainError::Conflict(_)
            | DomainError::InvalidStatus(_) => ApiError::BadRequest(err.to_string()),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Domain(e) => e.into(),
            StoreError::Database(detail) => {
                tracing::error!(error = %detail, "datastore failure");
                ApiError::Internal
            }
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        tracing::debug!(error = %err, "rejected bearer token");
        ApiError::Unauthorized("invalid or expired token".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), axum::Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_client_statuses() {
        assert_eq!(ApiError::from(DomainError::not_found("room")).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::from(DomainError::conflict("taken")).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::from(DomainError::invalid_status("x")).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::from(DomainError::invalid_id("abc")).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn datastore_detail_is_not_exposed() {
        let err = ApiError::from(StoreError::Database("password=hunter2".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "internal server error");
    }

    #[test]
    fn not_found_message_names_the_entity() {
        assert_eq!(
            ApiError::from(StoreError::not_found("booking")).to_string(),
            "booking not found"
        );
    }
}
