use std::sync::Arc;

use axum::{extract::Extension, Json};
use chrono::Utc;

use hotelier_auth::{IssuedToken, password_matches};

use crate::app::dto::LoginRequest;
use crate::app::errors::ApiError;
use crate::app::extract::ApiJson;
use crate::app::services::AppServices;

/// Exchange the admin password for a bearer token.
pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<Json<IssuedToken>, ApiError> {
    let Some(admin) = services.admin() else {
        return Err(ApiError::NotFound("admin authentication is disabled".to_string()));
    };

    if !password_matches(admin.admin_password(), &body.password) {
        tracing::warn!("admin login rejected");
        return Err(ApiError::Unauthorized("invalid password".to_string()));
    }

    let issued = admin.jwt().issue_admin(Utc::now()).map_err(|e| {
        tracing::error!(error = %e, "failed to issue admin token");
        ApiError::Internal
    })?;
    tracing::info!(expires_at = %issued.expires_at, "admin token issued");
    Ok(Json(issued))
}
