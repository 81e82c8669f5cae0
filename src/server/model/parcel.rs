use chrono::{DateTime, Utc};

use crate::{
    model::parcel::{CreateParcelDto, ParcelDto},
    server::model::user::normalize_optional,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Parcel {
    pub id: i32,
    pub room_id: i32,
    pub room_number: String,
    pub recipient_name: String,
    pub carrier: Option<String>,
    pub tracking_number: Option<String>,
    pub picked_up: bool,
    pub received_at: DateTime<Utc>,
    pub picked_up_at: Option<DateTime<Utc>>,
}

impl Parcel {
    pub fn from_entity(entity: entity::parcel::Model, room: Option<entity::room::Model>) -> Self {
        Self {
            id: entity.id,
            room_id: entity.room_id,
            room_number: room.map(|r| r.room_number).unwrap_or_default(),
            recipient_name: entity.recipient_name,
            carrier: entity.carrier,
            tracking_number: entity.tracking_number,
            picked_up: entity.picked_up,
            received_at: entity.received_at,
            picked_up_at: entity.picked_up_at,
        }
    }

    pub fn into_dto(self) -> ParcelDto {
        ParcelDto {
            id: self.id,
            room_id: self.room_id,
            room_number: self.room_number,
            recipient_name: self.recipient_name,
            carrier: self.carrier,
            tracking_number: self.tracking_number,
            picked_up: self.picked_up,
            received_at: self.received_at,
            picked_up_at: self.picked_up_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateParcelParams {
    pub room_id: i32,
    pub recipient_name: String,
    pub carrier: Option<String>,
    pub tracking_number: Option<String>,
}

impl CreateParcelParams {
    pub fn from_dto(dto: CreateParcelDto) -> Self {
        Self {
            room_id: dto.room_id,
            recipient_name: dto.recipient_name.trim().to_string(),
            carrier: normalize_optional(dto.carrier),
            tracking_number: normalize_optional(dto.tracking_number),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParcelFilter {
    pub picked_up: Option<bool>,
    pub room_id: Option<i32>,
}
