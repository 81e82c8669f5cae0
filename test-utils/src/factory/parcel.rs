//! Parcel factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ParcelFactory<'a> {
    db: &'a DatabaseConnection,
    room_id: i32,
    recipient_name: String,
    picked_up: bool,
}

impl<'a> ParcelFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, room_id: i32) -> Self {
        Self {
            db,
            room_id,
            recipient_name: "Somchai".to_string(),
            picked_up: false,
        }
    }

    pub fn recipient_name(mut self, name: impl Into<String>) -> Self {
        self.recipient_name = name.into();
        self
    }

    pub fn picked_up(mut self, picked_up: bool) -> Self {
        self.picked_up = picked_up;
        self
    }

    pub async fn build(self) -> Result<entity::parcel::Model, DbErr> {
        let picked_up_at = self.picked_up.then(Utc::now);
        entity::parcel::ActiveModel {
            room_id: ActiveValue::Set(self.room_id),
            recipient_name: ActiveValue::Set(self.recipient_name),
            carrier: ActiveValue::Set(Some("Kerry".to_string())),
            tracking_number: ActiveValue::Set(None),
            picked_up: ActiveValue::Set(self.picked_up),
            received_at: ActiveValue::Set(Utc::now()),
            picked_up_at: ActiveValue::Set(picked_up_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_parcel(db: &DatabaseConnection, room_id: i32) -> Result<entity::parcel::Model, DbErr> {
    ParcelFactory::new(db, room_id).build().await
}
