use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::room_type::RoomTypeFormDto,
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::room_type::{RoomType, RoomTypeParams},
        service::room_type::RoomTypeService,
        state::AppState,
    },
};

/// GET /api/room-types - All room types, cheapest first
///
/// Public; the landing page lists these.
pub async fn get_room_types(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let room_types = RoomTypeService::new(&state.db, state.storage.as_ref())
        .get_all()
        .await?;

    let dto: Vec<_> = room_types.into_iter().map(RoomType::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// GET /api/room-types/{id}
pub async fn get_room_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let room_type = RoomTypeService::new(&state.db, state.storage.as_ref())
        .get(id)
        .await?;

    Ok((StatusCode::OK, Json(room_type.into_dto())))
}

/// POST /api/room-types
///
/// `image` may be a base64 data URL, which is uploaded, or a URL stored as is.
///
/// # Access Control
/// - `Admin`
pub async fn create_room_type(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<RoomTypeFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;
    payload.validate()?;

    let room_type = RoomTypeService::new(&state.db, state.storage.as_ref())
        .create(RoomTypeParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(room_type.into_dto())))
}

/// PUT /api/room-types/{id}
///
/// Leaving `image` out keeps the current image.
///
/// # Access Control
/// - `Admin`
pub async fn update_room_type(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<RoomTypeFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;
    payload.validate()?;

    let room_type = RoomTypeService::new(&state.db, state.storage.as_ref())
        .update(id, RoomTypeParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(room_type.into_dto())))
}

/// DELETE /api/room-types/{id}
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `409 Conflict` - Rooms or queue entries still use the type
pub async fn delete_room_type(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    RoomTypeService::new(&state.db, state.storage.as_ref())
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
