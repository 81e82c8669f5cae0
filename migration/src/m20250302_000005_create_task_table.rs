use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000003_create_room_table::Room;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Task::Table)
                    .if_not_exists()
                    .col(pk_auto(Task::Id))
                    .col(integer(Task::RoomId))
                    .col(string_len(Task::Kind, 16))
                    .col(text(Task::Description))
                    .col(integer_null(Task::Price))
                    .col(string_len(Task::Status, 16).default("pending"))
                    .col(
                        timestamp_with_time_zone(Task::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Task::CompletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_room_id")
                            .from(Task::Table, Task::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Task::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Task {
    Table,
    Id,
    RoomId,
    Kind,
    Description,
    Price,
    Status,
    CreatedAt,
    CompletedAt,
}
