//! Chat message factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a message into `user_id`'s thread sent by `sender`.
pub async fn create_chat_message(
    db: &DatabaseConnection,
    user_id: i32,
    sender: &entity::user::Model,
    body: impl Into<String>,
) -> Result<entity::chat_message::Model, DbErr> {
    entity::chat_message::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        sender_id: ActiveValue::Set(sender.id),
        sender_admin: ActiveValue::Set(sender.admin),
        body: ActiveValue::Set(body.into()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
