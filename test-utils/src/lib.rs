//! Dormitory Test Utils
//!
//! Shared testing utilities for the dormitory application. Tests build an in-memory SQLite
//! database from the entity definitions and fill it with factory-made rows.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn assigns_tenant() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_dormitory_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (room_type, room, account) = factory::helpers::create_room_with_account(db).await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
