use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::auth::CredentialsDto;

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct RenterDto {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct RoomDto {
    pub id: i32,
    pub room_number: String,
    pub floor: i32,
    pub room_type_id: i32,
    pub room_type_name: String,
    pub price: i32,
    pub available: bool,
    pub image_url: Option<String>,
    pub renter: Option<RenterDto>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Validate)]
pub struct CreateRoomDto {
    #[validate(length(min = 1, max = 16))]
    pub room_number: String,
    pub room_type_id: i32,
    #[validate(range(min = 0, max = 200))]
    pub floor: i32,
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Validate)]
pub struct UpdateRoomDto {
    pub room_type_id: i32,
    #[validate(range(min = 0, max = 200))]
    pub floor: i32,
    pub available: bool,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Validate)]
pub struct AssignTenantDto {
    /// Queue entry the tenant booked through, if any.
    pub queue_id: Option<i32>,
    #[validate(length(min = 1, max = 64))]
    pub first_name: String,
    #[validate(length(min = 1, max = 64))]
    pub last_name: String,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
}

/// Room together with fresh credentials for its account.
///
/// Returned when a room is created and when a tenant moves out.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct RoomCredentialsDto {
    pub room: RoomDto,
    pub credentials: CredentialsDto,
}
