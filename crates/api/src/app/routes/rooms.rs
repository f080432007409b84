use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};

use hotelier_auth::Permission;
use hotelier_bookings::DateRange;
use hotelier_core::RoomId;
use hotelier_rooms::Room;

use crate::app::dto::{AvailabilityQuery, AvailabilityResponse, RoomRequest, SuccessResponse};
use crate::app::errors::ApiError;
use crate::app::extract::{ApiJson, ApiQuery};
use crate::app::services::AppServices;
use crate::authz;
use crate::context::PrincipalContext;

pub async fn list_rooms(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<Vec<Room>>, ApiError> {
    Ok(Json(services.store().list_rooms().await?))
}

pub async fn get_room(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Json<Room>, ApiError> {
    let room_id: RoomId = id.parse()?;
    Ok(Json(services.store().get_room(room_id).await?))
}

/// `GET /rooms/{id}/availability?check_in=..&check_out=..`
pub async fn availability(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    ApiQuery(query): ApiQuery<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, ApiError> {
    let room_id: RoomId = id.parse()?;
    let stay = DateRange::new(query.check_in, query.check_out)?;

    // The checker does not validate the room itself.
    services.store().get_room(room_id).await?;
    let available = services.store().is_available(room_id, stay, None).await?;

    Ok(Json(AvailabilityResponse {
        room_id,
        check_in: stay.check_in(),
        check_out: stay.check_out(),
        available,
    }))
}

pub async fn create_room(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    ApiJson(body): ApiJson<RoomRequest>,
) -> Result<(StatusCode, Json<Room>), ApiError> {
    authz::require(&principal, &Permission::ROOMS_WRITE)?;

    let room = services.store().create_room(body.into_draft()?).await?;
    tracing::info!(room_id = %room.room_id, room_number = %room.room_number, "room created");
    Ok((StatusCode::CREATED, Json(room)))
}

pub async fn update_room(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<RoomRequest>,
) -> Result<Json<Room>, ApiError> {
    authz::require(&principal, &Permission::ROOMS_WRITE)?;

    let room_id: RoomId = id.parse()?;
    let room = services.store().update_room(room_id, body.into_draft()?).await?;
    Ok(Json(room))
}

pub async fn delete_room(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, ApiError> {
    authz::require(&principal, &Permission::ROOMS_WRITE)?;

    let room_id: RoomId = id.parse()?;
    services.store().delete_room(room_id).await?;
    tracing::info!(room_id = %room_id, "room deleted");
    Ok(Json(SuccessResponse { success: true }))
}
