use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, post, put, query_string,
            send_request, serialize_json,
        },
        model::error::ApiError,
    },
    model::{
        api::PaginatedDto,
        queue::{AvailabilityDto, BookQueueDto, QueueEntryDto, QueueStatus, UpdateQueueStatusDto},
    },
};

pub async fn get_availability() -> Result<Vec<AvailabilityDto>, ApiError> {
    let response = send_request(get("/api/queue/availability")).await?;
    parse_response(response).await
}

pub async fn book(payload: BookQueueDto) -> Result<QueueEntryDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/queue").body(body)).await?;
    parse_response(response).await
}

pub async fn get_queue(
    status: Option<QueueStatus>,
    page: u64,
    entries: u64,
) -> Result<PaginatedDto<QueueEntryDto>, ApiError> {
    let url = format!(
        "/api/queue{}",
        query_string(&[
            ("status", status.map(|s| s.as_str().to_string())),
            ("page", Some(page.to_string())),
            ("entries", Some(entries.to_string())),
        ])
    );
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn update_status(id: i32, status: QueueStatus) -> Result<QueueEntryDto, ApiError> {
    let body = serialize_json(&UpdateQueueStatusDto { status })?;
    let url = format!("/api/queue/{}/status", id);
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_entry(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/queue/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
