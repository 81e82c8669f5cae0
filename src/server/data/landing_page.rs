use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel};

use crate::server::model::landing_page::{LandingPage, LANDING_PAGE_ID};

pub struct LandingPageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LandingPageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The stored landing page, if an admin has saved one.
    pub async fn get(&self) -> Result<Option<LandingPage>, DbErr> {
        let entity = entity::prelude::LandingPage::find_by_id(LANDING_PAGE_ID)
            .one(self.db)
            .await?;

        Ok(entity.map(LandingPage::from_entity))
    }

    /// Inserts or overwrites the single landing page row. `updated_at` on the input is ignored.
    pub async fn upsert(&self, page: LandingPage) -> Result<LandingPage, DbErr> {
        let existing = entity::prelude::LandingPage::find_by_id(LANDING_PAGE_ID)
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(existing) => {
                let mut active = existing.into_active_model();
                active.title = ActiveValue::Set(page.title);
                active.subtitle = ActiveValue::Set(page.subtitle);
                active.description = ActiveValue::Set(page.description);
                active.hero_image_url = ActiveValue::Set(page.hero_image_url);
                active.contact_phone = ActiveValue::Set(page.contact_phone);
                active.contact_email = ActiveValue::Set(page.contact_email);
                active.address = ActiveValue::Set(page.address);
                active.updated_at = ActiveValue::Set(Utc::now());
                active.update(self.db).await?
            }
            None => {
                entity::landing_page::ActiveModel {
                    id: ActiveValue::Set(LANDING_PAGE_ID),
                    title: ActiveValue::Set(page.title),
                    subtitle: ActiveValue::Set(page.subtitle),
                    description: ActiveValue::Set(page.description),
                    hero_image_url: ActiveValue::Set(page.hero_image_url),
                    contact_phone: ActiveValue::Set(page.contact_phone),
                    contact_email: ActiveValue::Set(page.contact_email),
                    address: ActiveValue::Set(page.address),
                    updated_at: ActiveValue::Set(Utc::now()),
                }
                .insert(self.db)
                .await?
            }
        };

        Ok(LandingPage::from_entity(entity))
    }
}
