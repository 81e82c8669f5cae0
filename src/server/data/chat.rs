use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::chat::ChatMessage;

pub struct ChatRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChatRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a message to the thread of `user_id`.
    pub async fn create(
        &self,
        user_id: i32,
        sender_id: i32,
        sender_admin: bool,
        body: String,
    ) -> Result<ChatMessage, DbErr> {
        let entity = entity::chat_message::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            sender_id: ActiveValue::Set(sender_id),
            sender_admin: ActiveValue::Set(sender_admin),
            body: ActiveValue::Set(body),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ChatMessage::from_entity(entity))
    }

    /// Messages of a thread in sending order, optionally only those after `after_id`.
    pub async fn get_thread(
        &self,
        user_id: i32,
        after_id: Option<i32>,
    ) -> Result<Vec<ChatMessage>, DbErr> {
        let mut query = entity::prelude::ChatMessage::find()
            .filter(entity::chat_message::Column::UserId.eq(user_id));
        if let Some(after_id) = after_id {
            query = query.filter(entity::chat_message::Column::Id.gt(after_id));
        }

        let entities = query
            .order_by_asc(entity::chat_message::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ChatMessage::from_entity).collect())
    }

    /// Deletes every message of the thread of `user_id`. Returns the number of rows removed.
    pub async fn delete_thread(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ChatMessage::delete_many()
            .filter(entity::chat_message::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// The latest message of every thread, newest thread first.
    pub async fn latest_per_user(&self) -> Result<Vec<ChatMessage>, DbErr> {
        let latest_ids: Vec<Option<i32>> = entity::prelude::ChatMessage::find()
            .select_only()
            .column_as(entity::chat_message::Column::Id.max(), "max_id")
            .group_by(entity::chat_message::Column::UserId)
            .into_tuple()
            .all(self.db)
            .await?;

        let ids: Vec<i32> = latest_ids.into_iter().flatten().collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::ChatMessage::find()
            .filter(entity::chat_message::Column::Id.is_in(ids))
            .order_by_desc(entity::chat_message::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ChatMessage::from_entity).collect())
    }
}
