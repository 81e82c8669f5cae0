use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, put, send_request, serialize_json,
        },
        model::error::ApiError,
    },
    model::{
        api::PaginatedDto,
        user::{UpdateProfileDto, UserDto},
    },
};

pub async fn get_users(page: u64, entries: u64) -> Result<PaginatedDto<UserDto>, ApiError> {
    let url = format!("/api/users?page={}&entries={}", page, entries);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn update_me(payload: UpdateProfileDto) -> Result<UserDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(put("/api/users/me").body(body)).await?;
    parse_response(response).await
}

pub async fn delete_user(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/users/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
