use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::room_type::RoomType;

pub struct RoomTypeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomTypeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: String,
        price: i32,
        description: String,
        image_url: Option<String>,
    ) -> Result<RoomType, DbErr> {
        let entity = entity::room_type::ActiveModel {
            name: ActiveValue::Set(name),
            price: ActiveValue::Set(price),
            description: ActiveValue::Set(description),
            image_url: ActiveValue::Set(image_url),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(RoomType::from_entity(entity))
    }

    /// All room types, cheapest first.
    pub async fn get_all(&self) -> Result<Vec<RoomType>, DbErr> {
        let entities = entity::prelude::RoomType::find()
            .order_by_asc(entity::room_type::Column::Price)
            .order_by_asc(entity::room_type::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(RoomType::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<RoomType>, DbErr> {
        let entity = entity::prelude::RoomType::find_by_id(id).one(self.db).await?;

        Ok(entity.map(RoomType::from_entity))
    }

    /// Updates a room type. `image_url` is written as given.
    ///
    /// # Returns
    /// - `Ok(Some(RoomType))` - Updated room type
    /// - `Ok(None)` - No room type with that ID
    pub async fn update(
        &self,
        id: i32,
        name: String,
        price: i32,
        description: String,
        image_url: Option<String>,
    ) -> Result<Option<RoomType>, DbErr> {
        let Some(entity) = entity::prelude::RoomType::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.name = ActiveValue::Set(name);
        active.price = ActiveValue::Set(price);
        active.description = ActiveValue::Set(description);
        active.image_url = ActiveValue::Set(image_url);
        let updated = active.update(self.db).await?;

        Ok(Some(RoomType::from_entity(updated)))
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::RoomType::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Number of rooms and queue entries referencing the room type.
    pub async fn count_references(&self, id: i32) -> Result<u64, DbErr> {
        let rooms = entity::prelude::Room::find()
            .filter(entity::room::Column::RoomTypeId.eq(id))
            .count(self.db)
            .await?;
        let queue = entity::prelude::Queue::find()
            .filter(entity::queue::Column::RoomTypeId.eq(id))
            .count(self.db)
            .await?;

        Ok(rooms + queue)
    }
}
