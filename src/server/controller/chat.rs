use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    model::chat::SendMessageDto,
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::chat::{ChatMessage, ChatThread},
        service::chat::ChatService,
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct MessagesQuery {
    /// Only messages with a larger id; used for polling.
    pub after_id: Option<i32>,
}

/// GET /api/chat/threads - Admin inbox, most recently active thread first
///
/// # Access Control
/// - `Admin`
pub async fn get_threads(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let threads = ChatService::new(&state.db).threads().await?;

    let dto: Vec<_> = threads.into_iter().map(ChatThread::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// GET /api/chat/{user_id}/messages
///
/// # Access Control
/// - `Thread(user_id)` - Admin or the thread's owner
pub async fn get_messages(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
    Query(query): Query<MessagesQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Thread(user_id)])
        .await?;

    let messages = ChatService::new(&state.db)
        .messages(user_id, query.after_id)
        .await?;

    let dto: Vec<_> = messages.into_iter().map(ChatMessage::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// POST /api/chat/{user_id}/messages
///
/// # Access Control
/// - `Thread(user_id)` - Admin or the thread's owner
pub async fn send_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
    Json(payload): Json<SendMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let sender = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Thread(user_id)])
        .await?;
    payload.validate()?;

    let message = ChatService::new(&state.db)
        .send(&sender, user_id, &payload.body)
        .await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}
