use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{parcel::ParcelRepository, room::RoomRepository},
    error::AppError,
    mail::{notify, template, Mailer},
    model::{
        pagination::Paginated,
        parcel::{CreateParcelParams, Parcel, ParcelFilter},
        user::User,
    },
    service::room::{renter_contact, ROOM_NOT_FOUND_MESSAGE},
};

pub const PARCEL_NOT_FOUND_MESSAGE: &str = "ไม่พบพัสดุ";

pub struct ParcelService<'a> {
    db: &'a DatabaseConnection,
    mailer: &'a dyn Mailer,
}

impl<'a> ParcelService<'a> {
    pub fn new(db: &'a DatabaseConnection, mailer: &'a dyn Mailer) -> Self {
        Self { db, mailer }
    }

    /// Records a parcel received for a room and emails the renter (best-effort).
    pub async fn create(&self, params: CreateParcelParams) -> Result<Parcel, AppError> {
        if RoomRepository::new(self.db)
            .find_by_id(params.room_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(ROOM_NOT_FOUND_MESSAGE.to_string()));
        }

        let parcel = ParcelRepository::new(self.db).create(params).await?;

        match renter_contact(self.db, parcel.room_id).await {
            Ok(Some((room_number, email))) => {
                notify(
                    self.mailer,
                    template::parcel_arrived(&email, &room_number, &parcel),
                )
                .await;
            }
            Ok(None) => {}
            Err(e) => tracing::warn!(parcel_id = parcel.id, "Renter lookup failed: {}", e),
        }

        Ok(parcel)
    }

    /// Lists parcels. Non-admin callers only see their own room.
    pub async fn get_paginated(
        &self,
        actor: &User,
        mut filter: ParcelFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Parcel>, AppError> {
        if !actor.admin {
            let Some(room_id) = actor.room_id else {
                return Ok(Paginated {
                    items: Vec::new(),
                    total: 0,
                    page,
                    per_page,
                });
            };
            filter.room_id = Some(room_id);
        }

        let (parcels, total) = ParcelRepository::new(self.db)
            .get_paginated(filter, page, per_page)
            .await?;

        Ok(Paginated {
            items: parcels,
            total,
            page,
            per_page,
        })
    }

    /// Marks a parcel as collected.
    ///
    /// # Returns
    /// - `Err(AppError::Conflict)` - Already picked up
    pub async fn pick_up(&self, id: i32) -> Result<Parcel, AppError> {
        let parcel = self.get(id).await?;
        if parcel.picked_up {
            return Err(AppError::Conflict("พัสดุนี้ถูกรับไปแล้ว".to_string()));
        }

        ParcelRepository::new(self.db).mark_picked_up(id).await?;

        tracing::info!(parcel_id = id, room_id = parcel.room_id, "Parcel picked up");

        self.get(id).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if ParcelRepository::new(self.db).delete(id).await? == 0 {
            return Err(AppError::NotFound(PARCEL_NOT_FOUND_MESSAGE.to_string()));
        }

        Ok(())
    }

    async fn get(&self, id: i32) -> Result<Parcel, AppError> {
        ParcelRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(PARCEL_NOT_FOUND_MESSAGE.to_string()))
    }
}
