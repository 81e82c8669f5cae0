//! Viewing-appointment queue and per-type slot availability.
//!
//! Availability is three independent counts with no locking; two bookings racing for the
//! last slot can both succeed.

use chrono::NaiveDate;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::queue::QueueStatus,
    server::{
        data::{queue::QueueRepository, room::RoomRepository, room_type::RoomTypeRepository},
        error::AppError,
        model::{
            pagination::Paginated,
            queue::{Availability, BookQueueParams, QueueEntry},
            room_type::RoomType,
        },
        service::{room::QUEUE_NOT_FOUND_MESSAGE, room_type::ROOM_TYPE_NOT_FOUND_MESSAGE},
    },
};

pub const ROOM_TYPE_FULL_MESSAGE: &str = "ห้องประเภทนี้เต็มแล้ว";

pub struct QueueService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QueueService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Slot counts for every room type.
    pub async fn availability(&self) -> Result<Vec<Availability>, AppError> {
        let room_types = RoomTypeRepository::new(self.db).get_all().await?;

        let mut result = Vec::with_capacity(room_types.len());
        for room_type in room_types {
            result.push(self.availability_of(room_type).await?);
        }

        Ok(result)
    }

    async fn availability_of(&self, room_type: RoomType) -> Result<Availability, AppError> {
        let room_repo = RoomRepository::new(self.db);
        let queue_repo = QueueRepository::new(self.db);

        let vacant = room_repo.count_vacant(room_type.id).await?;
        let unavailable = room_repo.count_unavailable(room_type.id).await?;
        let queued = queue_repo.count_active(room_type.id).await?;

        Ok(Availability {
            room_type_id: room_type.id,
            room_type_name: room_type.name,
            price: room_type.price,
            vacant: vacant as i64,
            unavailable: unavailable as i64,
            queued: queued as i64,
        })
    }

    /// Books a viewing appointment when the room type still has a free slot.
    ///
    /// # Arguments
    /// - `params` - Booking details
    /// - `today` - Local date; appointments before it are rejected
    ///
    /// # Returns
    /// - `Ok(QueueEntry)` - Pending entry
    /// - `Err(AppError::BadRequest)` - Appointment date in the past
    /// - `Err(AppError::NotFound)` - Room type does not exist
    /// - `Err(AppError::Conflict)` - No slots remaining
    pub async fn book(
        &self,
        params: BookQueueParams,
        today: NaiveDate,
    ) -> Result<QueueEntry, AppError> {
        if params.appointment_date < today {
            return Err(AppError::BadRequest(
                "วันนัดหมายต้องไม่เป็นวันที่ผ่านมาแล้ว".to_string(),
            ));
        }

        let room_type = RoomTypeRepository::new(self.db)
            .find_by_id(params.room_type_id)
            .await?
            .ok_or_else(|| AppError::NotFound(ROOM_TYPE_NOT_FOUND_MESSAGE.to_string()))?;

        let availability = self.availability_of(room_type).await?;
        if availability.remaining() <= 0 {
            return Err(AppError::Conflict(ROOM_TYPE_FULL_MESSAGE.to_string()));
        }

        let entry = QueueRepository::new(self.db).create(params).await?;

        tracing::info!(
            queue_id = entry.id,
            room_type_id = entry.room_type_id,
            "Booked viewing for {}",
            entry.appointment_date
        );

        Ok(entry)
    }

    pub async fn get_paginated(
        &self,
        status: Option<QueueStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<QueueEntry>, AppError> {
        let (entries, total) = QueueRepository::new(self.db)
            .get_paginated(status, page, per_page)
            .await?;

        Ok(Paginated {
            items: entries,
            total,
            page,
            per_page,
        })
    }

    /// Confirms or cancels an entry that is still pending or confirmed.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Target status other than confirmed/cancelled
    /// - `Err(AppError::Conflict)` - Entry already cancelled or assigned
    pub async fn update_status(&self, id: i32, status: QueueStatus) -> Result<QueueEntry, AppError> {
        if !matches!(status, QueueStatus::Confirmed | QueueStatus::Cancelled) {
            return Err(AppError::BadRequest(
                "เปลี่ยนสถานะคิวได้เฉพาะยืนยันหรือยกเลิก".to_string(),
            ));
        }

        let repo = QueueRepository::new(self.db);
        let entry = self.get(id).await?;

        if !entry.status.is_active() {
            return Err(AppError::Conflict(format!(
                "คิวนี้อยู่ในสถานะ{}แล้ว",
                entry.status.label()
            )));
        }

        repo.update_status(id, status).await?;

        self.get(id).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if QueueRepository::new(self.db).delete(id).await? == 0 {
            return Err(AppError::NotFound(QUEUE_NOT_FOUND_MESSAGE.to_string()));
        }

        Ok(())
    }

    async fn get(&self, id: i32) -> Result<QueueEntry, AppError> {
        QueueRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(QUEUE_NOT_FOUND_MESSAGE.to_string()))
    }
}
