use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    model::room::{AssignTenantDto, CreateRoomDto, UpdateRoomDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::room::{AssignTenantParams, CreateRoomParams, Room, RoomFilter, UpdateRoomParams},
        service::room::RoomService,
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct RoomQuery {
    pub floor: Option<i32>,
    pub room_type_id: Option<i32>,
    pub available: Option<bool>,
}

/// GET /api/rooms - Rooms with type, price and renter, ordered by room number
///
/// # Access Control
/// - `Admin`
pub async fn get_rooms(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<RoomQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let rooms = RoomService::new(&state.db, state.storage.as_ref(), &state.auth)
        .get_all(RoomFilter {
            floor: query.floor,
            room_type_id: query.room_type_id,
            available: query.available,
        })
        .await?;

    let dto: Vec<_> = rooms.into_iter().map(Room::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// GET /api/rooms/mine - The caller's own room
///
/// # Returns
/// - `200 OK` - The room
/// - `404 Not Found` - The account has no room
pub async fn get_my_room(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    let room = RoomService::new(&state.db, state.storage.as_ref(), &state.auth)
        .get_mine(&user)
        .await?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}

/// GET /api/rooms/{id}
///
/// # Access Control
/// - `Room(id)` - Admin or the room's account
pub async fn get_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(room_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Room(room_id)])
        .await?;

    let room = RoomService::new(&state.db, state.storage.as_ref(), &state.auth)
        .get(room_id)
        .await?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}

/// POST /api/rooms - Create a room and its account
///
/// The response carries the account's generated password; it is not retrievable later.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - Room and credentials
/// - `404 Not Found` - Room type does not exist
/// - `409 Conflict` - Room number or username already in use
pub async fn create_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;
    payload.validate()?;

    let created = RoomService::new(&state.db, state.storage.as_ref(), &state.auth)
        .create(CreateRoomParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(created.into_dto())))
}

/// PUT /api/rooms/{id}
///
/// # Access Control
/// - `Admin`
pub async fn update_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(room_id): Path<i32>,
    Json(payload): Json<UpdateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;
    payload.validate()?;

    let room = RoomService::new(&state.db, state.storage.as_ref(), &state.auth)
        .update(room_id, UpdateRoomParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}

/// DELETE /api/rooms/{id}
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `204 No Content` - Room and account deleted
/// - `409 Conflict` - The room has a tenant
pub async fn delete_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(room_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    RoomService::new(&state.db, state.storage.as_ref(), &state.auth)
        .delete(room_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/rooms/{id}/tenant - Move a tenant in, optionally from a queue entry
///
/// # Access Control
/// - `Admin`
pub async fn assign_tenant(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(room_id): Path<i32>,
    Json(payload): Json<AssignTenantDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;
    payload.validate()?;

    let room = RoomService::new(&state.db, state.storage.as_ref(), &state.auth)
        .assign_tenant(room_id, AssignTenantParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}

/// DELETE /api/rooms/{id}/tenant - Move the tenant out
///
/// Returns the account's new password.
///
/// # Access Control
/// - `Admin`
pub async fn vacate_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(room_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let vacated = RoomService::new(&state.db, state.storage.as_ref(), &state.auth)
        .vacate(room_id)
        .await?;

    Ok((StatusCode::OK, Json(vacated.into_dto())))
}
