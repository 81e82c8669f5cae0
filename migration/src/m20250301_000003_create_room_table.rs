use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_user_table::User, m20250301_000002_create_room_type_table::RoomType,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(pk_auto(Room::Id))
                    .col(string_uniq(Room::RoomNumber))
                    .col(integer(Room::RoomTypeId))
                    .col(integer(Room::Floor))
                    .col(integer_null(Room::RenterId))
                    .col(boolean(Room::Available).default(true))
                    .col(string_null(Room::ImageUrl))
                    .col(
                        timestamp_with_time_zone(Room::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_room_type_id")
                            .from(Room::Table, Room::RoomTypeId)
                            .to(RoomType::Table, RoomType::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_renter_id")
                            .from(Room::Table, Room::RenterId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Room::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Room {
    Table,
    Id,
    RoomNumber,
    RoomTypeId,
    Floor,
    RenterId,
    Available,
    ImageUrl,
    CreatedAt,
}
