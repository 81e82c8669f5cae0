use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct LandingPageDto {
    pub title: String,
    pub subtitle: String,
    /// Markdown.
    pub description: String,
    pub hero_image_url: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub address: Option<String>,
    /// `None` until an admin saves the page.
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Validate)]
pub struct UpdateLandingPageDto {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 300))]
    pub subtitle: String,
    #[validate(length(max = 20000))]
    pub description: String,
    /// Data URL to upload, URL to keep, or `None` to keep the current image.
    pub hero_image: Option<String>,
    #[validate(length(max = 20))]
    pub contact_phone: Option<String>,
    #[validate(email)]
    pub contact_email: Option<String>,
    #[validate(length(max = 1000))]
    pub address: Option<String>,
}
