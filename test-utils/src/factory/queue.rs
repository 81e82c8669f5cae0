//! Queue entry factory.

use crate::factory::helpers::next_id;
use chrono::{Days, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct QueueFactory<'a> {
    db: &'a DatabaseConnection,
    room_type_id: i32,
    first_name: String,
    email: String,
    appointment_date: chrono::NaiveDate,
    status: String,
}

impl<'a> QueueFactory<'a> {
    /// Defaults: status `pending`, appointment a week from today.
    pub fn new(db: &'a DatabaseConnection, room_type_id: i32) -> Self {
        let id = next_id();
        let today = Utc::now().date_naive();
        Self {
            db,
            room_type_id,
            first_name: format!("Guest{}", id),
            email: format!("guest{}@example.com", id),
            appointment_date: today.checked_add_days(Days::new(7)).unwrap_or(today),
            status: "pending".to_string(),
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn appointment_date(mut self, date: chrono::NaiveDate) -> Self {
        self.appointment_date = date;
        self
    }

    pub async fn build(self) -> Result<entity::queue::Model, DbErr> {
        entity::queue::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set("Visitor".to_string()),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set("0812345678".to_string()),
            room_type_id: ActiveValue::Set(self.room_type_id),
            appointment_date: ActiveValue::Set(self.appointment_date),
            status: ActiveValue::Set(self.status),
            note: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_queue_entry(
    db: &DatabaseConnection,
    room_type_id: i32,
) -> Result<entity::queue::Model, DbErr> {
    QueueFactory::new(db, room_type_id).build().await
}
