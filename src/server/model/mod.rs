//! Domain models and operation parameters.
//!
//! Repositories convert entities into these models at the data boundary; controllers convert
//! them into DTOs and build parameter structs from request DTOs.

pub mod bill;
pub mod chat;
pub mod dashboard;
pub mod landing_page;
pub mod pagination;
pub mod parcel;
pub mod queue;
pub mod room;
pub mod room_type;
pub mod task;
pub mod user;

use sea_orm::DbErr;

/// Parses a status string column into its enum.
pub(crate) fn parse_column<T>(column: &str, value: &str) -> Result<T, DbErr>
where
    T: std::str::FromStr<Err = String>,
{
    value
        .parse()
        .map_err(|e| DbErr::Custom(format!("Failed to parse {}: {}", column, e)))
}
