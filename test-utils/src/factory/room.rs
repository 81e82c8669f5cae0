//! Room factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for rooms. The room type must already exist.
///
/// ```rust,ignore
/// let room = RoomFactory::new(&db, room_type.id)
///     .room_number("B204")
///     .floor(2)
///     .build()
///     .await?;
/// ```
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    room_type_id: i32,
    room_number: String,
    floor: i32,
    renter_id: Option<i32>,
    available: bool,
}

impl<'a> RoomFactory<'a> {
    /// Defaults: room number `"R{id}"`, floor 1, no renter, available.
    pub fn new(db: &'a DatabaseConnection, room_type_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            room_type_id,
            room_number: format!("R{}", id),
            floor: 1,
            renter_id: None,
            available: true,
        }
    }

    pub fn room_number(mut self, room_number: impl Into<String>) -> Self {
        self.room_number = room_number.into();
        self
    }

    pub fn floor(mut self, floor: i32) -> Self {
        self.floor = floor;
        self
    }

    pub fn renter_id(mut self, renter_id: Option<i32>) -> Self {
        self.renter_id = renter_id;
        self
    }

    pub fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            room_number: ActiveValue::Set(self.room_number),
            room_type_id: ActiveValue::Set(self.room_type_id),
            floor: ActiveValue::Set(self.floor),
            renter_id: ActiveValue::Set(self.renter_id),
            available: ActiveValue::Set(self.available),
            image_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_room(
    db: &DatabaseConnection,
    room_type_id: i32,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db, room_type_id).build().await
}
