use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::auth::{ChangePasswordDto, LoginDto, RegisterDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::RegisterParams,
        service::auth::AuthService,
        state::AppState,
        util::cookie::{auth_cookie, clear_auth_cookie},
    },
};

/// POST /api/auth/register - Create a visitor account
///
/// # Returns
/// - `201 Created` - The new user
/// - `400 Bad Request` - Field validation failed
/// - `409 Conflict` - Username already taken
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = AuthService::new(&state.db, &state.auth)
        .register(RegisterParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// POST /api/auth/login - Log in with username and password
///
/// Sets the `token` cookie. The token is the same one accepted in an
/// `Authorization: Bearer` header.
///
/// # Returns
/// - `200 OK` - The logged-in user
/// - `401 Unauthorized` - Unknown username or wrong password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (user, token) = AuthService::new(&state.db, &state.auth)
        .login(&payload.username, payload.password)
        .await?;

    let cookie = auth_cookie(&token, &state.auth)?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(user.into_dto()),
    ))
}

/// POST /api/auth/logout - Clear the auth cookie
pub async fn logout(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let cookie = clear_auth_cookie(&state.auth)?;

    Ok((StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)]))
}

/// GET /api/auth/user - The currently logged-in user
///
/// # Returns
/// - `200 OK` - The user
/// - `401 Unauthorized` - No token, an invalid or expired one, or the user was deleted
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// PUT /api/auth/password - Change the caller's password
///
/// # Returns
/// - `204 No Content` - Password changed; a fresh cookie replaces the revoked one
/// - `401 Unauthorized` - Not logged in or current password wrong
pub async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;
    payload.validate()?;

    let token = AuthService::new(&state.db, &state.auth)
        .change_password(user.id, payload.current_password, payload.new_password)
        .await?;
    let cookie = auth_cookie(&token, &state.auth)?;

    Ok((StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)]))
}
