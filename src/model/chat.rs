use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ChatMessageDto {
    pub id: i32,
    /// Owner of the thread the message belongs to.
    pub user_id: i32,
    pub sender_id: i32,
    pub sender_admin: bool,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ChatThreadDto {
    pub user_id: i32,
    pub username: String,
    pub display_name: String,
    pub last_message: ChatMessageDto,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Validate)]
pub struct SendMessageDto {
    #[validate(length(min = 1, max = 2000))]
    pub body: String,
}
