//! Room type factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct RoomTypeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    price: i32,
    description: String,
    image_url: Option<String>,
}

impl<'a> RoomTypeFactory<'a> {
    /// Defaults: name `"Type {id}"`, price 3500, a short description, no image.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Type {}", id),
            price: 3500,
            description: "Air-conditioned single room".to_string(),
            image_url: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price(mut self, price: i32) -> Self {
        self.price = price;
        self
    }

    pub fn image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }

    pub async fn build(self) -> Result<entity::room_type::Model, DbErr> {
        entity::room_type::ActiveModel {
            name: ActiveValue::Set(self.name),
            price: ActiveValue::Set(self.price),
            description: ActiveValue::Set(self.description),
            image_url: ActiveValue::Set(self.image_url),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_room_type(db: &DatabaseConnection) -> Result<entity::room_type::Model, DbErr> {
    RoomTypeFactory::new(db).build().await
}
