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
        task::{CompleteTaskDto, CreateTaskDto, TaskDto, TaskStatus, UpdateTaskStatusDto},
    },
};

pub async fn create_task(payload: CreateTaskDto) -> Result<TaskDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/tasks").body(body)).await?;
    parse_response(response).await
}

pub async fn get_tasks(
    status: Option<TaskStatus>,
    page: u64,
    entries: u64,
) -> Result<PaginatedDto<TaskDto>, ApiError> {
    let url = format!(
        "/api/tasks{}",
        query_string(&[
            ("status", status.map(|s| s.as_str().to_string())),
            ("page", Some(page.to_string())),
            ("entries", Some(entries.to_string())),
        ])
    );
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn update_status(id: i32, status: TaskStatus) -> Result<TaskDto, ApiError> {
    let body = serialize_json(&UpdateTaskStatusDto { status })?;
    let url = format!("/api/tasks/{}/status", id);
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn complete_task(id: i32, price: i32) -> Result<TaskDto, ApiError> {
    let body = serialize_json(&CompleteTaskDto { price })?;
    let url = format!("/api/tasks/{}/complete", id);
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_task(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/tasks/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
