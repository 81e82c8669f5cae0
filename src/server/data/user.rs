//! User data repository for database operations.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParams, ProfileParams, User};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a user account.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique violations on `username`
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            password_hash: ActiveValue::Set(params.password_hash),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            admin: ActiveValue::Set(params.admin),
            room_id: ActiveValue::Set(params.room_id),
            token_version: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by username together with their password hash, for login.
    pub async fn find_with_hash_by_username(
        &self,
        username: &str,
    ) -> Result<Option<(User, String)>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(|e| {
            let hash = e.password_hash.clone();
            (User::from_entity(e), hash)
        }))
    }

    pub async fn find_hash_by_id(&self, user_id: i32) -> Result<Option<String>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id).one(self.db).await?;

        Ok(entity.map(|e| e.password_hash))
    }

    pub async fn username_exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Admin.eq(true))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Finds the account that belongs to a room.
    pub async fn find_by_room_id(&self, room_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::RoomId.eq(room_id))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn find_by_ids(&self, user_ids: Vec<i32>) -> Result<Vec<User>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Gets users ordered by username.
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users of the requested page and the total number of users
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Username)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let users = entities.into_iter().map(User::from_entity).collect();

        Ok((users, total))
    }

    /// Overwrites the profile fields of a user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that ID
    pub async fn update_profile(
        &self,
        user_id: i32,
        profile: ProfileParams,
    ) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(user_id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.first_name = ActiveValue::Set(profile.first_name);
        active.last_name = ActiveValue::Set(profile.last_name);
        active.email = ActiveValue::Set(profile.email);
        active.phone = ActiveValue::Set(profile.phone);
        let updated = active.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Replaces the hash and bumps `token_version`, revoking every token issued so far.
    /// Returns the number of rows updated.
    pub async fn update_password_hash(&self, user_id: i32, hash: String) -> Result<u64, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::PasswordHash, Expr::value(hash))
            .col_expr(
                entity::user::Column::TokenVersion,
                Expr::col(entity::user::Column::TokenVersion).add(1),
            )
            .filter(entity::user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts self-registered accounts: not admin and not tied to a room.
    pub async fn count_registered(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Admin.eq(false))
            .filter(entity::user::Column::RoomId.is_null())
            .count(self.db)
            .await
    }
}
