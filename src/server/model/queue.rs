//! Queue (viewing appointment) domain models.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::{
    model::queue::{AvailabilityDto, BookQueueDto, QueueEntryDto, QueueStatus},
    server::model::{parse_column, user::normalize_optional},
};

#[derive(Debug, Clone, PartialEq)]
pub struct QueueEntry {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub room_type_id: i32,
    pub room_type_name: String,
    pub appointment_date: NaiveDate,
    pub status: QueueStatus,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl QueueEntry {
    pub fn from_entity(
        entity: entity::queue::Model,
        room_type: Option<entity::room_type::Model>,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone: entity.phone,
            room_type_id: entity.room_type_id,
            room_type_name: room_type.map(|t| t.name).unwrap_or_default(),
            appointment_date: entity.appointment_date,
            status: parse_column("queue status", &entity.status)?,
            note: entity.note,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> QueueEntryDto {
        QueueEntryDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            room_type_id: self.room_type_id,
            room_type_name: self.room_type_name,
            appointment_date: self.appointment_date,
            status: self.status,
            note: self.note,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BookQueueParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub room_type_id: i32,
    pub appointment_date: NaiveDate,
    pub note: Option<String>,
}

impl BookQueueParams {
    pub fn from_dto(dto: BookQueueDto) -> Self {
        Self {
            first_name: dto.first_name.trim().to_string(),
            last_name: dto.last_name.trim().to_string(),
            email: dto.email.trim().to_string(),
            phone: dto.phone.trim().to_string(),
            room_type_id: dto.room_type_id,
            appointment_date: dto.appointment_date,
            note: normalize_optional(dto.note),
        }
    }
}

/// Slot counts of one room type.
#[derive(Debug, Clone, PartialEq)]
pub struct Availability {
    pub room_type_id: i32,
    pub room_type_name: String,
    pub price: i32,
    /// Rooms without a renter.
    pub vacant: i64,
    /// Vacant rooms marked out of service.
    pub unavailable: i64,
    /// Pending and confirmed queue entries.
    pub queued: i64,
}

impl Availability {
    /// Slots left for new bookings. May be negative.
    pub fn remaining(&self) -> i64 {
        self.vacant - self.unavailable - self.queued
    }

    pub fn into_dto(self) -> AvailabilityDto {
        let remaining = self.remaining();
        AvailabilityDto {
            room_type_id: self.room_type_id,
            room_type_name: self.room_type_name,
            price: self.price,
            vacant: self.vacant,
            unavailable: self.unavailable,
            queued: self.queued,
            remaining,
        }
    }
}
