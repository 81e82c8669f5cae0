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
                    .table(Parcel::Table)
                    .if_not_exists()
                    .col(pk_auto(Parcel::Id))
                    .col(integer(Parcel::RoomId))
                    .col(string(Parcel::RecipientName))
                    .col(string_null(Parcel::Carrier))
                    .col(string_null(Parcel::TrackingNumber))
                    .col(boolean(Parcel::PickedUp).default(false))
                    .col(
                        timestamp_with_time_zone(Parcel::ReceivedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Parcel::PickedUpAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parcel_room_id")
                            .from(Parcel::Table, Parcel::RoomId)
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
            .drop_table(Table::drop().table(Parcel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Parcel {
    Table,
    Id,
    RoomId,
    RecipientName,
    Carrier,
    TrackingNumber,
    PickedUp,
    ReceivedAt,
    PickedUpAt,
}
