use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, post, put, send_request,
            serialize_json,
        },
        model::error::ApiError,
    },
    model::room_type::{RoomTypeDto, RoomTypeFormDto},
};

pub async fn get_room_types() -> Result<Vec<RoomTypeDto>, ApiError> {
    let response = send_request(get("/api/room-types")).await?;
    parse_response(response).await
}

pub async fn create_room_type(payload: RoomTypeFormDto) -> Result<RoomTypeDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/room-types").body(body)).await?;
    parse_response(response).await
}

pub async fn update_room_type(id: i32, payload: RoomTypeFormDto) -> Result<RoomTypeDto, ApiError> {
    let body = serialize_json(&payload)?;
    let url = format!("/api/room-types/{}", id);
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_room_type(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/room-types/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
