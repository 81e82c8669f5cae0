use crate::{
    client::{
        api::helper::{
            get, parse_empty_response, parse_optional_response, parse_response, post, put,
            send_request, serialize_json,
        },
        model::error::ApiError,
    },
    model::{
        auth::{ChangePasswordDto, LoginDto, RegisterDto},
        user::UserDto,
    },
};

/// The logged-in user, or `None` without a valid cookie.
pub async fn get_user() -> Result<Option<UserDto>, ApiError> {
    let response = send_request(get("/api/auth/user")).await?;
    parse_optional_response(response).await
}

pub async fn login(payload: LoginDto) -> Result<UserDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/auth/login").body(body)).await?;
    parse_response(response).await
}

pub async fn register(payload: RegisterDto) -> Result<UserDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/auth/register").body(body)).await?;
    parse_response(response).await
}

pub async fn logout() -> Result<(), ApiError> {
    let response = send_request(post("/api/auth/logout")).await?;
    parse_empty_response(response).await
}

pub async fn change_password(payload: ChangePasswordDto) -> Result<(), ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(put("/api/auth/password").body(body)).await?;
    parse_empty_response(response).await
}
