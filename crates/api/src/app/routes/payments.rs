use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};

use hotelier_auth::Permission;
use hotelier_core::BookingId;
use hotelier_payments::Payment;

use crate::app::dto::RecordPaymentRequest;
use crate::app::errors::ApiError;
use crate::app::extract::ApiJson;
use crate::app::services::AppServices;
use crate::authz;
use crate::context::PrincipalContext;

pub async fn record_payment(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    ApiJson(body): ApiJson<RecordPaymentRequest>,
) -> Result<(StatusCode, Json<Payment>), ApiError> {
    authz::require(&principal, &Permission::PAYMENTS_WRITE)?;

    let payment = services.store().record_payment(body.into_draft()?).await?;
    tracing::info!(
        payment_id = %payment.payment_id,
        booking_id = %payment.booking_id,
        amount = %payment.amount,
        "payment recorded"
    );
    Ok((StatusCode::CREATED, Json(payment)))
}

pub async fn list_payments(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(booking_id): Path<String>,
) -> Result<Json<Vec<Payment>>, ApiError> {
    authz::require(&principal, &Permission::PAYMENTS_READ)?;

    let booking_id: BookingId = booking_id.parse()?;
    Ok(Json(services.store().list_payments(booking_id).await?))
}
