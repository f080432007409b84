use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, Json};

use hotelier_auth::Permission;
use hotelier_customers::Customer;

use crate::app::dto::CustomerRequest;
use crate::app::errors::ApiError;
use crate::app::extract::ApiJson;
use crate::app::services::AppServices;
use crate::authz;
use crate::context::PrincipalContext;

/// 201 when a customer was created, 200 when the email already existed.
pub async fn find_or_create_customer(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<CustomerRequest>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let (customer, created) = services
        .store()
        .find_or_create_customer(body.into_draft()?)
        .await?;

    let status = if created {
        tracing::info!(customer_id = %customer.customer_id, "customer created");
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(customer)))
}

pub async fn list_customers(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
) -> Result<Json<Vec<Customer>>, ApiError> {
    authz::require(&principal, &Permission::CUSTOMERS_READ)?;
    Ok(Json(services.store().list_customers().await?))
}
