use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::task::{TaskKind, TaskStatus},
    server::model::task::{Task, TaskFilter},
};

pub struct TaskRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a pending task for a room.
    pub async fn create(
        &self,
        room_id: i32,
        kind: TaskKind,
        description: String,
    ) -> Result<Task, DbErr> {
        let entity = entity::task::ActiveModel {
            room_id: ActiveValue::Set(room_id),
            kind: ActiveValue::Set(kind.as_str().to_string()),
            description: ActiveValue::Set(description),
            price: ActiveValue::Set(None),
            status: ActiveValue::Set(TaskStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            completed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let room = entity::prelude::Room::find_by_id(entity.room_id)
            .one(self.db)
            .await?;

        Task::from_entity(entity, room)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Task>, DbErr> {
        let Some((task, room)) = entity::prelude::Task::find_by_id(id)
            .find_also_related(entity::prelude::Room)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(Task::from_entity(task, room)?))
    }

    /// Gets tasks, newest first.
    pub async fn get_paginated(
        &self,
        filter: TaskFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Task>, u64), DbErr> {
        let mut query = entity::prelude::Task::find();
        if let Some(status) = filter.status {
            query = query.filter(entity::task::Column::Status.eq(status.as_str()));
        }
        if let Some(room_id) = filter.room_id {
            query = query.filter(entity::task::Column::RoomId.eq(room_id));
        }

        let paginator = query
            .order_by_desc(entity::task::Column::CreatedAt)
            .order_by_desc(entity::task::Column::Id)
            .find_also_related(entity::prelude::Room)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let tasks = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(|(task, room)| Task::from_entity(task, room))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((tasks, total))
    }

    pub async fn update_status(&self, id: i32, status: TaskStatus) -> Result<u64, DbErr> {
        let result = entity::prelude::Task::update_many()
            .col_expr(
                entity::task::Column::Status,
                Expr::value(status.as_str().to_string()),
            )
            .filter(entity::task::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Marks a task completed with its final price and completion time in one update.
    pub async fn complete(&self, id: i32, price: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Task::update_many()
            .col_expr(
                entity::task::Column::Status,
                Expr::value(TaskStatus::Completed.as_str().to_string()),
            )
            .col_expr(entity::task::Column::Price, Expr::value(Some(price)))
            .col_expr(entity::task::Column::CompletedAt, Expr::value(Some(Utc::now())))
            .filter(entity::task::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Task::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
