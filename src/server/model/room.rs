//! Room domain models and parameters.

use crate::{
    model::{
        auth::CredentialsDto,
        room::{
            AssignTenantDto, CreateRoomDto, RenterDto, RoomCredentialsDto, RoomDto, UpdateRoomDto,
        },
    },
    server::model::user::normalize_optional,
};

/// The room's current tenant, read from its room account.
#[derive(Debug, Clone, PartialEq)]
pub struct Renter {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Renter {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            user_id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone: entity.phone,
        }
    }
}

/// Room joined with its type and renter.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: i32,
    pub room_number: String,
    pub floor: i32,
    pub room_type_id: i32,
    pub room_type_name: String,
    pub price: i32,
    pub available: bool,
    pub image_url: Option<String>,
    pub renter: Option<Renter>,
}

impl Room {
    pub fn from_entity(
        entity: entity::room::Model,
        room_type: Option<entity::room_type::Model>,
        renter: Option<entity::user::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            room_number: entity.room_number,
            floor: entity.floor,
            room_type_id: entity.room_type_id,
            room_type_name: room_type
                .as_ref()
                .map(|t| t.name.clone())
                .unwrap_or_default(),
            price: room_type.as_ref().map(|t| t.price).unwrap_or(0),
            available: entity.available,
            image_url: entity.image_url,
            renter: renter.map(Renter::from_entity),
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.renter.is_some()
    }

    pub fn into_dto(self) -> RoomDto {
        RoomDto {
            id: self.id,
            room_number: self.room_number,
            floor: self.floor,
            room_type_id: self.room_type_id,
            room_type_name: self.room_type_name,
            price: self.price,
            available: self.available,
            image_url: self.image_url,
            renter: self.renter.map(|r| RenterDto {
                user_id: r.user_id,
                first_name: r.first_name,
                last_name: r.last_name,
                email: r.email,
                phone: r.phone,
            }),
        }
    }
}

/// Room together with plain-text credentials for its account.
#[derive(Debug, Clone)]
pub struct RoomWithCredentials {
    pub room: Room,
    pub username: String,
    pub password: String,
}

impl RoomWithCredentials {
    pub fn into_dto(self) -> RoomCredentialsDto {
        RoomCredentialsDto {
            room: self.room.into_dto(),
            credentials: CredentialsDto {
                username: self.username,
                password: self.password,
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RoomFilter {
    pub floor: Option<i32>,
    pub room_type_id: Option<i32>,
    pub available: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct CreateRoomParams {
    pub room_number: String,
    pub room_type_id: i32,
    pub floor: i32,
    pub image: Option<String>,
}

impl CreateRoomParams {
    pub fn from_dto(dto: CreateRoomDto) -> Self {
        Self {
            room_number: dto.room_number.trim().to_string(),
            room_type_id: dto.room_type_id,
            floor: dto.floor,
            image: dto.image,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateRoomParams {
    pub room_type_id: i32,
    pub floor: i32,
    pub available: bool,
}

impl UpdateRoomParams {
    pub fn from_dto(dto: UpdateRoomDto) -> Self {
        Self {
            room_type_id: dto.room_type_id,
            floor: dto.floor,
            available: dto.available,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AssignTenantParams {
    pub queue_id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl AssignTenantParams {
    pub fn from_dto(dto: AssignTenantDto) -> Self {
        Self {
            queue_id: dto.queue_id,
            first_name: dto.first_name.trim().to_string(),
            last_name: dto.last_name.trim().to_string(),
            email: normalize_optional(dto.email),
            phone: normalize_optional(dto.phone),
        }
    }
}
