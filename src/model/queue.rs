use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum QueueStatus {
    Pending,
    Confirmed,
    Cancelled,
    Assigned,
}

impl QueueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Assigned => "assigned",
        }
    }

    /// Entries that still hold a slot of their room type.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "รอยืนยัน",
            Self::Confirmed => "ยืนยันแล้ว",
            Self::Cancelled => "ยกเลิก",
            Self::Assigned => "เข้าพักแล้ว",
        }
    }
}

impl std::str::FromStr for QueueStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            "assigned" => Ok(Self::Assigned),
            other => Err(format!("unknown queue status '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct QueueEntryDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub room_type_id: i32,
    pub room_type_name: String,
    pub appointment_date: NaiveDate,
    pub status: QueueStatus,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Validate)]
pub struct BookQueueDto {
    #[validate(length(min = 1, max = 64))]
    pub first_name: String,
    #[validate(length(min = 1, max = 64))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 9, max = 20))]
    pub phone: String,
    pub room_type_id: i32,
    pub appointment_date: NaiveDate,
    #[validate(length(max = 1000))]
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct UpdateQueueStatusDto {
    pub status: QueueStatus,
}

/// Slot counts for one room type.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct AvailabilityDto {
    pub room_type_id: i32,
    pub room_type_name: String,
    pub price: i32,
    pub vacant: i64,
    pub unavailable: i64,
    pub queued: i64,
    /// `vacant - unavailable - queued`; zero or less means full.
    pub remaining: i64,
}
