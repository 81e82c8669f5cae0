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
                    .table(Bill::Table)
                    .if_not_exists()
                    .col(pk_auto(Bill::Id))
                    .col(integer(Bill::RoomId))
                    .col(date(Bill::BillingMonth))
                    .col(integer(Bill::Rent))
                    .col(integer(Bill::Water))
                    .col(integer(Bill::Electricity))
                    .col(integer(Bill::Other))
                    .col(integer(Bill::Total))
                    .col(date(Bill::DueDate))
                    .col(string_len(Bill::Status, 16).default("unpaid"))
                    .col(string_null(Bill::ProofImageUrl))
                    .col(
                        timestamp_with_time_zone(Bill::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Bill::PaidAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bill_room_id")
                            .from(Bill::Table, Bill::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bill_room_month")
                    .table(Bill::Table)
                    .col(Bill::RoomId)
                    .col(Bill::BillingMonth)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bill::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bill {
    Table,
    Id,
    RoomId,
    BillingMonth,
    Rent,
    Water,
    Electricity,
    Other,
    Total,
    DueDate,
    Status,
    ProofImageUrl,
    CreatedAt,
    PaidAt,
}
