use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::task::{CreateTaskDto, TaskDto, TaskKind, TaskStatus},
    server::model::parse_column,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i32,
    pub room_id: i32,
    pub room_number: String,
    pub kind: TaskKind,
    pub description: String,
    pub price: Option<i32>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn from_entity(
        entity: entity::task::Model,
        room: Option<entity::room::Model>,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            room_id: entity.room_id,
            room_number: room.map(|r| r.room_number).unwrap_or_default(),
            kind: parse_column("task kind", &entity.kind)?,
            description: entity.description,
            price: entity.price,
            status: parse_column("task status", &entity.status)?,
            created_at: entity.created_at,
            completed_at: entity.completed_at,
        })
    }

    pub fn into_dto(self) -> TaskDto {
        TaskDto {
            id: self.id,
            room_id: self.room_id,
            room_number: self.room_number,
            kind: self.kind,
            description: self.description,
            price: self.price,
            status: self.status,
            created_at: self.created_at,
            completed_at: self.completed_at,
        }
    }
}

/// New task input. `room_id` is resolved by the service from the caller.
#[derive(Debug, Clone)]
pub struct CreateTaskParams {
    pub room_id: Option<i32>,
    pub kind: TaskKind,
    pub description: String,
}

impl CreateTaskParams {
    pub fn from_dto(dto: CreateTaskDto) -> Self {
        Self {
            room_id: dto.room_id,
            kind: dto.kind,
            description: dto.description.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub room_id: Option<i32>,
}
