//! One chat thread per user with the dormitory office.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{chat::ChatRepository, user::UserRepository},
    error::AppError,
    model::{
        chat::{ChatMessage, ChatThread},
        user::User,
    },
    service::user::USER_NOT_FOUND_MESSAGE,
};

pub struct ChatService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChatService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every thread with its latest message, most recent first.
    pub async fn threads(&self) -> Result<Vec<ChatThread>, AppError> {
        let latest = ChatRepository::new(self.db).latest_per_user().await?;

        let owner_ids = latest.iter().map(|m| m.user_id).collect();
        let owners: HashMap<i32, User> = UserRepository::new(self.db)
            .find_by_ids(owner_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Ok(latest
            .into_iter()
            .filter_map(|message| {
                let owner = owners.get(&message.user_id)?;
                Some(ChatThread {
                    user_id: owner.id,
                    username: owner.username.clone(),
                    display_name: format!("{} {}", owner.first_name, owner.last_name),
                    last_message: message,
                })
            })
            .collect())
    }

    /// Messages of `user_id`'s thread, optionally only those newer than `after_id`.
    pub async fn messages(
        &self,
        user_id: i32,
        after_id: Option<i32>,
    ) -> Result<Vec<ChatMessage>, AppError> {
        self.thread_owner(user_id).await?;

        Ok(ChatRepository::new(self.db)
            .get_thread(user_id, after_id)
            .await?)
    }

    /// Posts `body` to `user_id`'s thread as `sender`.
    pub async fn send(
        &self,
        sender: &User,
        user_id: i32,
        body: &str,
    ) -> Result<ChatMessage, AppError> {
        let body = body.trim();
        if body.is_empty() {
            return Err(AppError::BadRequest("กรุณาพิมพ์ข้อความ".to_string()));
        }

        self.thread_owner(user_id).await?;

        let message = ChatRepository::new(self.db)
            .create(user_id, sender.id, sender.admin, body.to_string())
            .await?;

        Ok(message)
    }

    async fn thread_owner(&self, user_id: i32) -> Result<User, AppError> {
        let owner = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND_MESSAGE.to_string()))?;

        if owner.admin {
            return Err(AppError::BadRequest(
                "ผู้ดูแลระบบไม่มีห้องสนทนา".to_string(),
            ));
        }

        Ok(owner)
    }
}
