use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::queue::QueueStatus,
    server::model::queue::{BookQueueParams, QueueEntry},
};

pub struct QueueRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QueueRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a pending queue entry.
    pub async fn create(&self, params: BookQueueParams) -> Result<QueueEntry, DbErr> {
        let entity = entity::queue::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            room_type_id: ActiveValue::Set(params.room_type_id),
            appointment_date: ActiveValue::Set(params.appointment_date),
            status: ActiveValue::Set(QueueStatus::Pending.as_str().to_string()),
            note: ActiveValue::Set(params.note),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let room_type = entity::prelude::RoomType::find_by_id(entity.room_type_id)
            .one(self.db)
            .await?;

        QueueEntry::from_entity(entity, room_type)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<QueueEntry>, DbErr> {
        let Some((entry, room_type)) = entity::prelude::Queue::find_by_id(id)
            .find_also_related(entity::prelude::RoomType)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(QueueEntry::from_entity(entry, room_type)?))
    }

    /// Gets queue entries by appointment date, earliest first.
    ///
    /// # Returns
    /// - `Ok((entries, total))` - Entries of the requested page and the total matching
    /// - `Err(DbErr)` - Database error or unparseable status column
    pub async fn get_paginated(
        &self,
        status: Option<QueueStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<QueueEntry>, u64), DbErr> {
        let mut query = entity::prelude::Queue::find();
        if let Some(status) = status {
            query = query.filter(entity::queue::Column::Status.eq(status.as_str()));
        }

        let paginator = query
            .order_by_asc(entity::queue::Column::AppointmentDate)
            .order_by_asc(entity::queue::Column::Id)
            .find_also_related(entity::prelude::RoomType)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entries = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(|(entry, room_type)| QueueEntry::from_entity(entry, room_type))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((entries, total))
    }

    pub async fn update_status(&self, id: i32, status: QueueStatus) -> Result<u64, DbErr> {
        let result = entity::prelude::Queue::update_many()
            .col_expr(
                entity::queue::Column::Status,
                Expr::value(status.as_str().to_string()),
            )
            .filter(entity::queue::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Queue::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Pending and confirmed entries for a room type.
    pub async fn count_active(&self, room_type_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Queue::find()
            .filter(entity::queue::Column::RoomTypeId.eq(room_type_id))
            .filter(entity::queue::Column::Status.is_in([
                QueueStatus::Pending.as_str(),
                QueueStatus::Confirmed.as_str(),
            ]))
            .count(self.db)
            .await
    }
}
