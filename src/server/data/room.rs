//! Room data repository.
//!
//! Rooms are always returned joined with their room type and current renter. The renter is
//! loaded in a second query keyed by `renter_id`.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::room::{Room, RoomFilter, UpdateRoomParams};

pub struct RoomRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a vacant, available room.
    pub async fn create(
        &self,
        room_number: String,
        room_type_id: i32,
        floor: i32,
        image_url: Option<String>,
    ) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            room_number: ActiveValue::Set(room_number),
            room_type_id: ActiveValue::Set(room_type_id),
            floor: ActiveValue::Set(floor),
            renter_id: ActiveValue::Set(None),
            available: ActiveValue::Set(true),
            image_url: ActiveValue::Set(image_url),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, room_id: i32) -> Result<Option<Room>, DbErr> {
        let Some((room, room_type)) = entity::prelude::Room::find_by_id(room_id)
            .find_also_related(entity::prelude::RoomType)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let renter = match room.renter_id {
            Some(renter_id) => entity::prelude::User::find_by_id(renter_id).one(self.db).await?,
            None => None,
        };

        Ok(Some(Room::from_entity(room, room_type, renter)))
    }

    pub async fn room_number_exists(&self, room_number: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Room::find()
            .filter(entity::room::Column::RoomNumber.eq(room_number))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets rooms matching the filter, ordered by room number.
    pub async fn get_filtered(&self, filter: RoomFilter) -> Result<Vec<Room>, DbErr> {
        let mut query = entity::prelude::Room::find();
        if let Some(floor) = filter.floor {
            query = query.filter(entity::room::Column::Floor.eq(floor));
        }
        if let Some(room_type_id) = filter.room_type_id {
            query = query.filter(entity::room::Column::RoomTypeId.eq(room_type_id));
        }
        if let Some(available) = filter.available {
            query = query.filter(entity::room::Column::Available.eq(available));
        }

        let rows = query
            .order_by_asc(entity::room::Column::RoomNumber)
            .find_also_related(entity::prelude::RoomType)
            .all(self.db)
            .await?;

        let renter_ids: Vec<i32> = rows.iter().filter_map(|(room, _)| room.renter_id).collect();
        let mut renters: HashMap<i32, entity::user::Model> = if renter_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::User::find()
                .filter(entity::user::Column::Id.is_in(renter_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|u| (u.id, u))
                .collect()
        };

        Ok(rows
            .into_iter()
            .map(|(room, room_type)| {
                let renter = room.renter_id.and_then(|id| renters.remove(&id));
                Room::from_entity(room, room_type, renter)
            })
            .collect())
    }

    /// Updates type, floor and availability of a room.
    ///
    /// # Returns
    /// - `Ok(true)` - Room updated
    /// - `Ok(false)` - No room with that ID
    pub async fn update(&self, room_id: i32, params: UpdateRoomParams) -> Result<bool, DbErr> {
        let Some(entity) = entity::prelude::Room::find_by_id(room_id).one(self.db).await? else {
            return Ok(false);
        };

        let mut active = entity.into_active_model();
        active.room_type_id = ActiveValue::Set(params.room_type_id);
        active.floor = ActiveValue::Set(params.floor);
        active.available = ActiveValue::Set(params.available);
        active.update(self.db).await?;

        Ok(true)
    }

    pub async fn set_image(&self, room_id: i32, image_url: Option<String>) -> Result<u64, DbErr> {
        let result = entity::prelude::Room::update_many()
            .col_expr(entity::room::Column::ImageUrl, Expr::value(image_url))
            .filter(entity::room::Column::Id.eq(room_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Sets or clears the renter together with the availability flag.
    pub async fn set_renter(
        &self,
        room_id: i32,
        renter_id: Option<i32>,
        available: bool,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Room::update_many()
            .col_expr(entity::room::Column::RenterId, Expr::value(renter_id))
            .col_expr(entity::room::Column::Available, Expr::value(available))
            .filter(entity::room::Column::Id.eq(room_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, room_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Room::delete_by_id(room_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Rooms of the type without a renter.
    pub async fn count_vacant(&self, room_type_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Room::find()
            .filter(entity::room::Column::RoomTypeId.eq(room_type_id))
            .filter(entity::room::Column::RenterId.is_null())
            .count(self.db)
            .await
    }

    /// Vacant rooms of the type that are marked unavailable.
    pub async fn count_unavailable(&self, room_type_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Room::find()
            .filter(entity::room::Column::RoomTypeId.eq(room_type_id))
            .filter(entity::room::Column::RenterId.is_null())
            .filter(entity::room::Column::Available.eq(false))
            .count(self.db)
            .await
    }
}
