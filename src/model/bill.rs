use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum BillStatus {
    Unpaid,
    PendingReview,
    Paid,
}

impl BillStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unpaid => "unpaid",
            Self::PendingReview => "pending_review",
            Self::Paid => "paid",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unpaid => "ค้างชำระ",
            Self::PendingReview => "รอตรวจสอบ",
            Self::Paid => "ชำระแล้ว",
        }
    }
}

impl std::str::FromStr for BillStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unpaid" => Ok(Self::Unpaid),
            "pending_review" => Ok(Self::PendingReview),
            "paid" => Ok(Self::Paid),
            other => Err(format!("unknown bill status '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct BillDto {
    pub id: i32,
    pub room_id: i32,
    pub room_number: String,
    /// `YYYY-MM`
    pub billing_month: String,
    pub rent: i32,
    pub water: i32,
    pub electricity: i32,
    pub other: i32,
    pub total: i32,
    pub due_date: NaiveDate,
    pub status: BillStatus,
    pub proof_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Validate)]
pub struct CreateBillDto {
    pub room_id: i32,
    /// `YYYY-MM`
    #[validate(length(equal = 7))]
    pub billing_month: String,
    #[validate(range(min = 0, max = 100_000_000))]
    pub rent: i32,
    #[validate(range(min = 0, max = 100_000_000))]
    pub water: i32,
    #[validate(range(min = 0, max = 100_000_000))]
    pub electricity: i32,
    #[validate(range(min = 0, max = 100_000_000))]
    pub other: i32,
    pub due_date: NaiveDate,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct BillProofDto {
    pub image: String,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct UpdateBillStatusDto {
    pub status: BillStatus,
}
