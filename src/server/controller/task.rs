use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    model::task::{CompleteTaskDto, CreateTaskDto, TaskStatus, UpdateTaskStatusDto},
    server::{
        controller::{default_entries, page_size, parse_status},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::task::{CreateTaskParams, Task, TaskFilter},
        service::task::TaskService,
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct TaskQuery {
    pub status: Option<String>,
    pub room_id: Option<i32>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

/// POST /api/tasks - File a housekeeping or maintenance request
///
/// Room accounts always file for their own room. Admins must pass `room_id`.
///
/// # Returns
/// - `201 Created` - Pending task
/// - `400 Bad Request` - Missing room
/// - `404 Not Found` - Room does not exist
pub async fn create_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;
    payload.validate()?;

    let task = TaskService::new(&state.db)
        .create(&user, CreateTaskParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(task.into_dto())))
}

/// GET /api/tasks - Paginated tasks, newest first
///
/// Admins see every room, other accounts only their own.
pub async fn get_tasks(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<TaskQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    let filter = TaskFilter {
        status: parse_status::<TaskStatus>(query.status)?,
        room_id: query.room_id,
    };
    let tasks = TaskService::new(&state.db)
        .get_paginated(&user, filter, query.page, page_size(query.entries)?)
        .await?;

    Ok((StatusCode::OK, Json(tasks.into_dto(Task::into_dto))))
}

/// PUT /api/tasks/{id}/status - Move between pending and in progress
///
/// # Access Control
/// - `Admin`
pub async fn update_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTaskStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let task = TaskService::new(&state.db)
        .update_status(id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(task.into_dto())))
}

/// PUT /api/tasks/{id}/complete - Close a task with its final price
///
/// # Access Control
/// - `Admin`
pub async fn complete_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CompleteTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;
    payload.validate()?;

    let task = TaskService::new(&state.db)
        .complete(id, payload.price)
        .await?;

    Ok((StatusCode::OK, Json(task.into_dto())))
}

/// DELETE /api/tasks/{id}
///
/// Admins delete any task; a room's account may cancel its own pending tasks.
pub async fn delete_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    TaskService::new(&state.db).delete(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
