use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChatMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(ChatMessage::Id))
                    .col(integer(ChatMessage::UserId))
                    .col(integer(ChatMessage::SenderId))
                    .col(boolean(ChatMessage::SenderAdmin))
                    .col(text(ChatMessage::Body))
                    .col(
                        timestamp_with_time_zone(ChatMessage::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chat_message_user_id")
                            .from(ChatMessage::Table, ChatMessage::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChatMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChatMessage {
    Table,
    Id,
    UserId,
    SenderId,
    SenderAdmin,
    Body,
    CreatedAt,
}
