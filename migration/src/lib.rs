pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_user_table;
mod m20250301_000002_create_room_type_table;
mod m20250301_000003_create_room_table;
mod m20250301_000004_create_queue_table;
mod m20250302_000005_create_task_table;
mod m20250302_000006_create_bill_table;
mod m20250302_000007_create_parcel_table;
mod m20250303_000008_create_chat_message_table;
mod m20250303_000009_create_landing_page_table;
mod m20250310_000010_add_token_version_to_user;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_user_table::Migration),
            Box::new(m20250301_000002_create_room_type_table::Migration),
            Box::new(m20250301_000003_create_room_table::Migration),
            Box::new(m20250301_000004_create_queue_table::Migration),
            Box::new(m20250302_000005_create_task_table::Migration),
            Box::new(m20250302_000006_create_bill_table::Migration),
            Box::new(m20250302_000007_create_parcel_table::Migration),
            Box::new(m20250303_000008_create_chat_message_table::Migration),
            Box::new(m20250303_000009_create_landing_page_table::Migration),
            Box::new(m20250310_000010_add_token_version_to_user::Migration),
        ]
    }
}
