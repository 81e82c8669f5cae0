use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    model::parcel::CreateParcelDto,
    server::{
        controller::{default_entries, page_size},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::parcel::{CreateParcelParams, Parcel, ParcelFilter},
        service::parcel::ParcelService,
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct ParcelQuery {
    pub picked_up: Option<bool>,
    pub room_id: Option<i32>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

/// POST /api/parcels - Log a delivery held at the office
///
/// # Access Control
/// - `Admin`
pub async fn create_parcel(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateParcelDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;
    payload.validate()?;

    let parcel = ParcelService::new(&state.db, state.mailer.as_ref())
        .create(CreateParcelParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(parcel.into_dto())))
}

/// GET /api/parcels - Paginated parcels, latest first
///
/// Admins see every room, other accounts only their own.
pub async fn get_parcels(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ParcelQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    let filter = ParcelFilter {
        picked_up: query.picked_up,
        room_id: query.room_id,
    };
    let parcels = ParcelService::new(&state.db, state.mailer.as_ref())
        .get_paginated(&user, filter, query.page, page_size(query.entries)?)
        .await?;

    Ok((StatusCode::OK, Json(parcels.into_dto(Parcel::into_dto))))
}

/// PUT /api/parcels/{id}/pickup
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Parcel with pickup time
/// - `409 Conflict` - Already picked up
pub async fn pick_up(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let parcel = ParcelService::new(&state.db, state.mailer.as_ref())
        .pick_up(id)
        .await?;

    Ok((StatusCode::OK, Json(parcel.into_dto())))
}

/// DELETE /api/parcels/{id}
///
/// # Access Control
/// - `Admin`
pub async fn delete_parcel(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    ParcelService::new(&state.db, state.mailer.as_ref())
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
