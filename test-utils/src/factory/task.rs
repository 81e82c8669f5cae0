//! Task factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct TaskFactory<'a> {
    db: &'a DatabaseConnection,
    room_id: i32,
    kind: String,
    description: String,
    status: String,
    price: Option<i32>,
}

impl<'a> TaskFactory<'a> {
    /// Defaults: a pending maintenance task with no price.
    pub fn new(db: &'a DatabaseConnection, room_id: i32) -> Self {
        Self {
            db,
            room_id,
            kind: "maintenance".to_string(),
            description: "Leaking faucet".to_string(),
            status: "pending".to_string(),
            price: None,
        }
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn price(mut self, price: Option<i32>) -> Self {
        self.price = price;
        self
    }

    pub async fn build(self) -> Result<entity::task::Model, DbErr> {
        let completed_at = (self.status == "completed").then(Utc::now);
        entity::task::ActiveModel {
            room_id: ActiveValue::Set(self.room_id),
            kind: ActiveValue::Set(self.kind),
            description: ActiveValue::Set(self.description),
            price: ActiveValue::Set(self.price),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            completed_at: ActiveValue::Set(completed_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_task(db: &DatabaseConnection, room_id: i32) -> Result<entity::task::Model, DbErr> {
    TaskFactory::new(db, room_id).build().await
}
