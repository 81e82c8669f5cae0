use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::user::UpdateProfileDto,
    server::{
        controller::{page_size, PaginationParams},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{ProfileParams, User},
        service::user::UserService,
        state::AppState,
    },
};

/// GET /api/users - Paginated list of every account, ordered by username
///
/// # Access Control
/// - `Admin`
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db)
        .get_all(params.page, page_size(params.entries)?)
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto(User::into_dto))))
}

/// GET /api/users/{id}
///
/// # Access Control
/// - `Admin`
pub async fn get_user_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db).get(user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// PUT /api/users/me - Update the caller's own name and contact details
pub async fn update_me(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;
    payload.validate()?;

    let user = UserService::new(&state.db)
        .update_profile(user.id, ProfileParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// DELETE /api/users/{id}
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `400 Bad Request` - Admin tried to delete their own account
/// - `404 Not Found` - No such user
/// - `409 Conflict` - The account belongs to a room; delete the room instead
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db).delete(admin.id, user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
