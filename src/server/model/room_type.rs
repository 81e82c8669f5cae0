use chrono::{DateTime, Utc};

use crate::model::room_type::{RoomTypeDto, RoomTypeFormDto};

#[derive(Debug, Clone, PartialEq)]
pub struct RoomType {
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub description: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl RoomType {
    pub fn from_entity(entity: entity::room_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            price: entity.price,
            description: entity.description,
            image_url: entity.image_url,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> RoomTypeDto {
        RoomTypeDto {
            id: self.id,
            name: self.name,
            price: self.price,
            description: self.description,
            image_url: self.image_url,
        }
    }
}

/// Create/update input. `image` is unresolved (data URL or URL).
#[derive(Debug, Clone)]
pub struct RoomTypeParams {
    pub name: String,
    pub price: i32,
    pub description: String,
    pub image: Option<String>,
}

impl RoomTypeParams {
    pub fn from_dto(dto: RoomTypeFormDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            price: dto.price,
            description: dto.description,
            image: dto.image,
        }
    }
}
