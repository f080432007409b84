use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};

use hotelier_auth::Permission;
use hotelier_bookings::BookingView;
use hotelier_core::BookingId;

use crate::app::dto::{CreateBookingRequest, UpdateStatusRequest};
use crate::app::errors::ApiError;
use crate::app::extract::ApiJson;
use crate::app::services::AppServices;
use crate::authz;
use crate::context::PrincipalContext;

pub async fn create_booking(
    Extension(services): Extension<Arc<AppServices>>,
    ApiJson(body): ApiJson<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingView>), ApiError> {
    let view = services
        .bookings()
        .create_booking(
            body.customer_id,
            body.room_id,
            body.check_in,
            body.check_out,
            body.total_amount,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn list_bookings(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
) -> Result<Json<Vec<BookingView>>, ApiError> {
    authz::require(&principal, &Permission::BOOKINGS_READ)?;
    Ok(Json(services.bookings().list_bookings().await?))
}

pub async fn get_booking(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> Result<Json<BookingView>, ApiError> {
    authz::require(&principal, &Permission::BOOKINGS_READ)?;

    let booking_id: BookingId = id.parse()?;
    Ok(Json(services.bookings().get_booking(booking_id).await?))
}

/// `PUT /bookings/{id}/status` with `{"status": "checked_in"}`.
pub async fn update_status(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<UpdateStatusRequest>,
) -> Result<Json<BookingView>, ApiError> {
    authz::require(&principal, &Permission::BOOKINGS_WRITE)?;

    let booking_id: BookingId = id.parse()?;
    let transition = services.bookings().set_status(booking_id, &body.status).await?;
    Ok(Json(transition.booking))
}
