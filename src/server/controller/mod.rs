//! HTTP handlers.
//!
//! Each handler authenticates through [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! validates the request DTO, converts it to service parameters and maps the result back to a
//! DTO.

pub mod auth;
pub mod bill;
pub mod chat;
pub mod dashboard;
pub mod landing_page;
pub mod parcel;
pub mod queue;
pub mod room;
pub mod room_type;
pub mod task;
pub mod upload;
pub mod user;

#[cfg(test)]
mod test;

use serde::Deserialize;

use crate::server::error::AppError;

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

/// Largest page a list endpoint returns.
pub(crate) const MAX_ENTRIES: u64 = 100;

pub(crate) fn default_entries() -> u64 {
    20
}

/// Checks the `entries` query parameter; zero is rejected and large values are capped.
pub(crate) fn page_size(entries: u64) -> Result<u64, AppError> {
    if entries == 0 {
        return Err(AppError::BadRequest("จำนวนรายการต่อหน้าต้องมากกว่า 0".to_string()));
    }

    Ok(entries.min(MAX_ENTRIES))
}

/// Parses an optional status query parameter into its enum.
pub(crate) fn parse_status<T>(value: Option<String>) -> Result<Option<T>, AppError>
where
    T: std::str::FromStr<Err = String>,
{
    value
        .filter(|v| !v.is_empty())
        .map(|v| v.parse().map_err(AppError::BadRequest))
        .transpose()
}
