use chrono::{Datelike, FixedOffset, NaiveDate, Utc};

use crate::server::error::AppError;

/// UTC+7, Asia/Bangkok. Thailand has no daylight saving time.
const BANGKOK_OFFSET_SECONDS: i32 = 7 * 3600;

/// Today's date at the dormitory.
pub fn local_today() -> NaiveDate {
    match FixedOffset::east_opt(BANGKOK_OFFSET_SECONDS) {
        Some(offset) => Utc::now().with_timezone(&offset).date_naive(),
        None => Utc::now().date_naive(),
    }
}

/// Parses a `YYYY-MM` billing month into the first day of that month.
pub fn parse_billing_month(input: &str) -> Result<NaiveDate, AppError> {
    let invalid = || AppError::BadRequest("รูปแบบเดือนไม่ถูกต้อง (YYYY-MM)".to_string());

    let (year, month) = input.trim().split_once('-').ok_or_else(invalid)?;
    if year.len() != 4 || month.len() != 2 {
        return Err(invalid());
    }
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)
}

pub fn format_billing_month(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}
