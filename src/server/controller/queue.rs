use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    model::queue::{BookQueueDto, QueueStatus, UpdateQueueStatusDto},
    server::{
        controller::{default_entries, page_size, parse_status},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::queue::{Availability, BookQueueParams, QueueEntry},
        service::queue::QueueService,
        state::AppState,
        util::date::local_today,
    },
};

#[derive(Deserialize)]
pub struct QueueQuery {
    pub status: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

/// GET /api/queue/availability - Free viewing slots per room type
///
/// Public. A room type whose `remaining` is zero or less is full.
pub async fn get_availability(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let availability = QueueService::new(&state.db).availability().await?;

    let dto: Vec<_> = availability
        .into_iter()
        .map(Availability::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// POST /api/queue - Book a viewing appointment
///
/// Public.
///
/// # Returns
/// - `201 Created` - Pending queue entry
/// - `400 Bad Request` - Invalid fields or appointment date in the past
/// - `404 Not Found` - Room type does not exist
/// - `409 Conflict` - No slots left for the room type
pub async fn book(
    State(state): State<AppState>,
    Json(payload): Json<BookQueueDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let entry = QueueService::new(&state.db)
        .book(BookQueueParams::from_dto(payload), local_today())
        .await?;

    Ok((StatusCode::CREATED, Json(entry.into_dto())))
}

/// GET /api/queue - Paginated queue entries, earliest appointment first
///
/// # Access Control
/// - `Admin`
pub async fn get_queue(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<QueueQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let status = parse_status::<QueueStatus>(query.status)?;
    let entries = QueueService::new(&state.db)
        .get_paginated(status, query.page, page_size(query.entries)?)
        .await?;

    Ok((StatusCode::OK, Json(entries.into_dto(QueueEntry::into_dto))))
}

/// PUT /api/queue/{id}/status - Confirm or cancel an entry
///
/// # Access Control
/// - `Admin`
pub async fn update_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateQueueStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let entry = QueueService::new(&state.db)
        .update_status(id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(entry.into_dto())))
}

/// DELETE /api/queue/{id}
///
/// # Access Control
/// - `Admin`
pub async fn delete_entry(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    QueueService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
