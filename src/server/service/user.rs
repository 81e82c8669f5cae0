//! User administration and self-service profile updates.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        pagination::Paginated,
        user::{ProfileParams, User},
    },
};

pub const USER_NOT_FOUND_MESSAGE: &str = "ไม่พบผู้ใช้";

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, page: u64, per_page: u64) -> Result<Paginated<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        let (users, total) = user_repo.get_all_paginated(page, per_page).await?;

        Ok(Paginated {
            items: users,
            total,
            page,
            per_page,
        })
    }

    pub async fn get(&self, user_id: i32) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND_MESSAGE.to_string()))
    }

    pub async fn update_profile(
        &self,
        user_id: i32,
        profile: ProfileParams,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        user_repo
            .update_profile(user_id, profile)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND_MESSAGE.to_string()))
    }

    /// Deletes an account.
    ///
    /// # Returns
    /// - `Ok(())` - Account deleted
    /// - `Err(AppError::BadRequest)` - `actor_id` tried to delete itself
    /// - `Err(AppError::Conflict)` - The account belongs to a room; delete the room instead
    /// - `Err(AppError::NotFound)` - No such account
    pub async fn delete(&self, actor_id: i32, user_id: i32) -> Result<(), AppError> {
        if actor_id == user_id {
            return Err(AppError::BadRequest(
                "ไม่สามารถลบบัญชีของตัวเองได้".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);
        let user = self.get(user_id).await?;

        if user.room_id.is_some() {
            return Err(AppError::Conflict(
                "บัญชีนี้เป็นบัญชีประจำห้อง กรุณาลบห้องแทน".to_string(),
            ));
        }

        user_repo.delete(user.id).await?;

        Ok(())
    }
}
