use sea_orm::DatabaseConnection;

use crate::server::{
    data::landing_page::LandingPageRepository,
    error::AppError,
    model::landing_page::{LandingPage, UpdateLandingPageParams},
    storage::{resolve_optional_image, ObjectStorage},
};

pub struct LandingPageService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a dyn ObjectStorage,
}

impl<'a> LandingPageService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a dyn ObjectStorage) -> Self {
        Self { db, storage }
    }

    /// The saved landing page, or the built-in default before the first save.
    pub async fn get(&self) -> Result<LandingPage, AppError> {
        Ok(LandingPageRepository::new(self.db)
            .get()
            .await?
            .unwrap_or_default())
    }

    /// Saves the landing page. Without a new hero image the current one is kept.
    pub async fn update(&self, params: UpdateLandingPageParams) -> Result<LandingPage, AppError> {
        let current = self.get().await?;

        let hero_image_url =
            match resolve_optional_image(self.storage, params.hero_image.as_deref()).await? {
                Some(url) => Some(url),
                None => current.hero_image_url,
            };

        let page = LandingPageRepository::new(self.db)
            .upsert(LandingPage {
                title: params.title,
                subtitle: params.subtitle,
                description: params.description,
                hero_image_url,
                contact_phone: params.contact_phone,
                contact_email: params.contact_email,
                address: params.address,
                updated_at: None,
            })
            .await?;

        Ok(page)
    }
}
