use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ParcelDto {
    pub id: i32,
    pub room_id: i32,
    pub room_number: String,
    pub recipient_name: String,
    pub carrier: Option<String>,
    pub tracking_number: Option<String>,
    pub picked_up: bool,
    pub received_at: DateTime<Utc>,
    pub picked_up_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Validate)]
pub struct CreateParcelDto {
    pub room_id: i32,
    #[validate(length(min = 1, max = 128))]
    pub recipient_name: String,
    #[validate(length(max = 64))]
    pub carrier: Option<String>,
    #[validate(length(max = 64))]
    pub tracking_number: Option<String>,
}
