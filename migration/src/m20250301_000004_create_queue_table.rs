use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000002_create_room_type_table::RoomType;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Queue::Table)
                    .if_not_exists()
                    .col(pk_auto(Queue::Id))
                    .col(string(Queue::FirstName))
                    .col(string(Queue::LastName))
                    .col(string(Queue::Email))
                    .col(string(Queue::Phone))
                    .col(integer(Queue::RoomTypeId))
                    .col(date(Queue::AppointmentDate))
                    .col(string_len(Queue::Status, 16).default("pending"))
                    .col(text_null(Queue::Note))
                    .col(
                        timestamp_with_time_zone(Queue::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_queue_room_type_id")
                            .from(Queue::Table, Queue::RoomTypeId)
                            .to(RoomType::Table, RoomType::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_queue_room_type_status")
                    .table(Queue::Table)
                    .col(Queue::RoomTypeId)
                    .col(Queue::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Queue::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Queue {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    RoomTypeId,
    AppointmentDate,
    Status,
    Note,
    CreatedAt,
}
