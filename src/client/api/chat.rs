use crate::{
    client::{
        api::helper::{get, parse_response, post, query_string, send_request, serialize_json},
        model::error::ApiError,
    },
    model::chat::{ChatMessageDto, ChatThreadDto, SendMessageDto},
};

pub async fn get_threads() -> Result<Vec<ChatThreadDto>, ApiError> {
    let response = send_request(get("/api/chat/threads")).await?;
    parse_response(response).await
}

/// Messages of `user_id`'s thread, only those newer than `after_id` when given.
pub async fn get_messages(
    user_id: i32,
    after_id: Option<i32>,
) -> Result<Vec<ChatMessageDto>, ApiError> {
    let url = format!(
        "/api/chat/{}/messages{}",
        user_id,
        query_string(&[("after_id", after_id.map(|id| id.to_string()))])
    );
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn send_message(user_id: i32, body: String) -> Result<ChatMessageDto, ApiError> {
    let payload = serialize_json(&SendMessageDto { body })?;
    let url = format!("/api/chat/{}/messages", user_id);
    let response = send_request(post(&url).body(payload)).await?;
    parse_response(response).await
}
