use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct RoomTypeDto {
    pub id: i32,
    pub name: String,
    /// Monthly rent in baht.
    pub price: i32,
    pub description: String,
    pub image_url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default, Validate)]
pub struct RoomTypeFormDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(range(min = 0))]
    pub price: i32,
    pub description: String,
    /// A `data:image/...;base64,` URL to upload or an `http(s)` URL to keep.
    pub image: Option<String>,
}
