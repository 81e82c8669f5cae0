use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, post, put, query_string,
            send_request, serialize_json,
        },
        model::error::ApiError,
    },
    model::room::{AssignTenantDto, CreateRoomDto, RoomCredentialsDto, RoomDto, UpdateRoomDto},
};

pub async fn get_rooms(
    floor: Option<i32>,
    room_type_id: Option<i32>,
    available: Option<bool>,
) -> Result<Vec<RoomDto>, ApiError> {
    let url = format!(
        "/api/rooms{}",
        query_string(&[
            ("floor", floor.map(|v| v.to_string())),
            ("room_type_id", room_type_id.map(|v| v.to_string())),
            ("available", available.map(|v| v.to_string())),
        ])
    );
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_my_room() -> Result<RoomDto, ApiError> {
    let response = send_request(get("/api/rooms/mine")).await?;
    parse_response(response).await
}

pub async fn create_room(payload: CreateRoomDto) -> Result<RoomCredentialsDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/rooms").body(body)).await?;
    parse_response(response).await
}

pub async fn update_room(id: i32, payload: UpdateRoomDto) -> Result<RoomDto, ApiError> {
    let body = serialize_json(&payload)?;
    let url = format!("/api/rooms/{}", id);
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_room(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/rooms/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}

pub async fn assign_tenant(id: i32, payload: AssignTenantDto) -> Result<RoomDto, ApiError> {
    let body = serialize_json(&payload)?;
    let url = format!("/api/rooms/{}/tenant", id);
    let response = send_request(post(&url).body(body)).await?;
    parse_response(response).await
}

/// Moves the tenant out; the response carries the account's new password.
pub async fn vacate_room(id: i32) -> Result<RoomCredentialsDto, ApiError> {
    let url = format!("/api/rooms/{}/tenant", id);
    let response = send_request(delete(&url)).await?;
    parse_response(response).await
}
