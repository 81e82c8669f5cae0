use chrono::{DateTime, Utc};

use crate::model::chat::{ChatMessageDto, ChatThreadDto};

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: i32,
    pub user_id: i32,
    pub sender_id: i32,
    pub sender_admin: bool,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn from_entity(entity: entity::chat_message::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            sender_id: entity.sender_id,
            sender_admin: entity.sender_admin,
            body: entity.body,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ChatMessageDto {
        ChatMessageDto {
            id: self.id,
            user_id: self.user_id,
            sender_id: self.sender_id,
            sender_admin: self.sender_admin,
            body: self.body,
            created_at: self.created_at,
        }
    }
}

/// A user's conversation with the office, summarized by its latest message.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatThread {
    pub user_id: i32,
    pub username: String,
    pub display_name: String,
    pub last_message: ChatMessage,
}

impl ChatThread {
    pub fn into_dto(self) -> ChatThreadDto {
        ChatThreadDto {
            user_id: self.user_id,
            username: self.username,
            display_name: self.display_name,
            last_message: self.last_message.into_dto(),
        }
    }
}
