//! API-side authorization guard for admin handlers.
//!
//! Authentication happens in the middleware; this answers whether the
//! authenticated principal may perform the operation.

use hotelier_auth::{Permission, authorize};

use crate::app::errors::ApiError;
use crate::context::PrincipalContext;

/// Check `required` for the current request's principal.
pub fn require(principal: &PrincipalContext, required: &Permission) -> Result<(), ApiError> {
    authorize(&principal.to_principal(), required).map_err(|e| ApiError::Forbidden(e.to_string()))
}
