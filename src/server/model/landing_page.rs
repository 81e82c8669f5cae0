use chrono::{DateTime, Utc};

use crate::{
    model::landing_page::{LandingPageDto, UpdateLandingPageDto},
    server::model::user::normalize_optional,
};

/// Primary key of the single landing page row.
pub const LANDING_PAGE_ID: i32 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct LandingPage {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub hero_image_url: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub address: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for LandingPage {
    /// Content shown before an admin edits the page.
    fn default() -> Self {
        Self {
            title: "หอพักของเรา".to_string(),
            subtitle: "ห้องพักสะอาด ปลอดภัย ใกล้ทุกที่ที่คุณต้องการ".to_string(),
            description: "ยินดีต้อนรับสู่หอพักของเรา\n\n\
                          - ห้องพักพร้อมเฟอร์นิเจอร์\n\
                          - กล้องวงจรปิดและคีย์การ์ด\n\
                          - อินเทอร์เน็ตความเร็วสูง\n\n\
                          จองคิวเข้าชมห้องได้ด้านล่าง"
                .to_string(),
            hero_image_url: None,
            contact_phone: None,
            contact_email: None,
            address: None,
            updated_at: None,
        }
    }
}

impl LandingPage {
    pub fn from_entity(entity: entity::landing_page::Model) -> Self {
        Self {
            title: entity.title,
            subtitle: entity.subtitle,
            description: entity.description,
            hero_image_url: entity.hero_image_url,
            contact_phone: entity.contact_phone,
            contact_email: entity.contact_email,
            address: entity.address,
            updated_at: Some(entity.updated_at),
        }
    }

    pub fn into_dto(self) -> LandingPageDto {
        LandingPageDto {
            title: self.title,
            subtitle: self.subtitle,
            description: self.description,
            hero_image_url: self.hero_image_url,
            contact_phone: self.contact_phone,
            contact_email: self.contact_email,
            address: self.address,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateLandingPageParams {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Unresolved image; `None` keeps the current one.
    pub hero_image: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub address: Option<String>,
}

impl UpdateLandingPageParams {
    pub fn from_dto(dto: UpdateLandingPageDto) -> Self {
        Self {
            title: dto.title.trim().to_string(),
            subtitle: dto.subtitle.trim().to_string(),
            description: dto.description,
            hero_image: normalize_optional(dto.hero_image),
            contact_phone: normalize_optional(dto.contact_phone),
            contact_email: normalize_optional(dto.contact_email),
            address: normalize_optional(dto.address),
        }
    }
}
