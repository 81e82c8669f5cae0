use sea_orm::DatabaseConnection;

use crate::server::{
    data::room_type::RoomTypeRepository,
    error::AppError,
    model::room_type::{RoomType, RoomTypeParams},
    storage::{resolve_optional_image, ObjectStorage},
};

pub const ROOM_TYPE_NOT_FOUND_MESSAGE: &str = "ไม่พบประเภทห้อง";

pub struct RoomTypeService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a dyn ObjectStorage,
}

impl<'a> RoomTypeService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a dyn ObjectStorage) -> Self {
        Self { db, storage }
    }

    pub async fn get_all(&self) -> Result<Vec<RoomType>, AppError> {
        Ok(RoomTypeRepository::new(self.db).get_all().await?)
    }

    pub async fn get(&self, id: i32) -> Result<RoomType, AppError> {
        RoomTypeRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(ROOM_TYPE_NOT_FOUND_MESSAGE.to_string()))
    }

    /// Creates a room type, uploading the image first when it is a data URL.
    pub async fn create(&self, params: RoomTypeParams) -> Result<RoomType, AppError> {
        let image_url = resolve_optional_image(self.storage, params.image.as_deref()).await?;

        let room_type = RoomTypeRepository::new(self.db)
            .create(params.name, params.price, params.description, image_url)
            .await?;

        Ok(room_type)
    }

    /// Updates a room type. Without a new image the current one is kept.
    pub async fn update(&self, id: i32, params: RoomTypeParams) -> Result<RoomType, AppError> {
        let repo = RoomTypeRepository::new(self.db);
        let existing = self.get(id).await?;

        let image_url = match resolve_optional_image(self.storage, params.image.as_deref()).await? {
            Some(url) => Some(url),
            None => existing.image_url,
        };

        repo.update(id, params.name, params.price, params.description, image_url)
            .await?
            .ok_or_else(|| AppError::NotFound(ROOM_TYPE_NOT_FOUND_MESSAGE.to_string()))
    }

    /// Deletes a room type nothing refers to.
    ///
    /// # Returns
    /// - `Err(AppError::Conflict)` - Rooms or queue entries still use the type
    /// - `Err(AppError::NotFound)` - No such room type
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = RoomTypeRepository::new(self.db);

        if repo.count_references(id).await? > 0 {
            return Err(AppError::Conflict(
                "ยังมีห้องหรือคิวที่ใช้ประเภทห้องนี้อยู่".to_string(),
            ));
        }

        if repo.delete(id).await? == 0 {
            return Err(AppError::NotFound(ROOM_TYPE_NOT_FOUND_MESSAGE.to_string()));
        }

        Ok(())
    }
}
