//! Housekeeping and maintenance work orders.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::task::TaskStatus,
    server::{
        data::{room::RoomRepository, task::TaskRepository},
        error::{auth::AuthError, AppError},
        model::{
            pagination::Paginated,
            task::{CreateTaskParams, Task, TaskFilter},
            user::User,
        },
        service::room::ROOM_NOT_FOUND_MESSAGE,
    },
};

pub const TASK_NOT_FOUND_MESSAGE: &str = "ไม่พบงาน";

pub struct TaskService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files a task.
    ///
    /// A room account always files for its own room and the given `room_id` is ignored. An
    /// admin must name the room.
    pub async fn create(&self, actor: &User, params: CreateTaskParams) -> Result<Task, AppError> {
        let room_id = if actor.admin {
            params
                .room_id
                .ok_or_else(|| AppError::BadRequest("กรุณาระบุห้อง".to_string()))?
        } else {
            actor.room_id.ok_or_else(|| {
                AppError::BadRequest("บัญชีนี้ไม่มีห้องพัก".to_string())
            })?
        };

        if RoomRepository::new(self.db).find_by_id(room_id).await?.is_none() {
            return Err(AppError::NotFound(ROOM_NOT_FOUND_MESSAGE.to_string()));
        }

        let task = TaskRepository::new(self.db)
            .create(room_id, params.kind, params.description)
            .await?;

        Ok(task)
    }

    /// Lists tasks. Non-admin callers only see their own room.
    pub async fn get_paginated(
        &self,
        actor: &User,
        mut filter: TaskFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Task>, AppError> {
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

        let (tasks, total) = TaskRepository::new(self.db)
            .get_paginated(filter, page, per_page)
            .await?;

        Ok(Paginated {
            items: tasks,
            total,
            page,
            per_page,
        })
    }

    /// Moves a task between pending and in progress.
    ///
    /// Completion goes through [`Self::complete`] since it needs a price.
    pub async fn update_status(&self, id: i32, status: TaskStatus) -> Result<Task, AppError> {
        if status == TaskStatus::Completed {
            return Err(AppError::BadRequest(
                "กรุณาใช้การปิดงานพร้อมระบุค่าใช้จ่าย".to_string(),
            ));
        }

        let task = self.get(id).await?;
        if task.status == TaskStatus::Completed {
            return Err(AppError::Conflict("งานนี้เสร็จสิ้นแล้ว".to_string()));
        }

        TaskRepository::new(self.db).update_status(id, status).await?;

        self.get(id).await
    }

    /// Completes a task with its final price in a single update.
    pub async fn complete(&self, id: i32, price: i32) -> Result<Task, AppError> {
        if TaskRepository::new(self.db).complete(id, price).await? == 0 {
            return Err(AppError::NotFound(TASK_NOT_FOUND_MESSAGE.to_string()));
        }

        tracing::info!(task_id = id, price, "Completed task");

        self.get(id).await
    }

    /// Deletes a task. Admins may delete any task, the room's account only pending ones.
    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        let task = self.get(id).await?;

        if !actor.admin {
            if actor.room_id != Some(task.room_id) {
                return Err(AuthError::AccessDenied(
                    actor.id,
                    format!("Task {} belongs to another room", id),
                )
                .into());
            }
            if task.status != TaskStatus::Pending {
                return Err(AppError::Conflict(
                    "ยกเลิกได้เฉพาะงานที่ยังไม่เริ่มดำเนินการ".to_string(),
                ));
            }
        }

        TaskRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    async fn get(&self, id: i32) -> Result<Task, AppError> {
        TaskRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(TASK_NOT_FOUND_MESSAGE.to_string()))
    }
}
