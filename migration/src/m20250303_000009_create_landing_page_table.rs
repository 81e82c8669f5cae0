use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LandingPage::Table)
                    .if_not_exists()
                    .col(integer(LandingPage::Id).primary_key())
                    .col(string(LandingPage::Title))
                    .col(string(LandingPage::Subtitle))
                    .col(text(LandingPage::Description))
                    .col(string_null(LandingPage::HeroImageUrl))
                    .col(string_null(LandingPage::ContactPhone))
                    .col(string_null(LandingPage::ContactEmail))
                    .col(text_null(LandingPage::Address))
                    .col(
                        timestamp_with_time_zone(LandingPage::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LandingPage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LandingPage {
    Table,
    Id,
    Title,
    Subtitle,
    Description,
    HeroImageUrl,
    ContactPhone,
    ContactEmail,
    Address,
    UpdatedAt,
}
