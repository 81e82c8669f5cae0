//! Registration, login and password changes.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::AuthConfig,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::auth::issue_token,
    model::user::{CreateUserParams, RegisterParams, User},
    util::password::{hash_password, verify_password},
};

pub const USERNAME_TAKEN_MESSAGE: &str = "ชื่อผู้ใช้นี้ถูกใช้แล้ว";

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    auth: &'a AuthConfig,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, auth: &'a AuthConfig) -> Self {
        Self { db, auth }
    }

    /// Creates a regular account without a room.
    ///
    /// # Returns
    /// - `Ok(User)` - Newly registered user
    /// - `Err(AppError::Conflict)` - Username already taken
    /// - `Err(AppError::DbErr | BcryptErr)` - Database or hashing failure
    pub async fn register(&self, params: RegisterParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.username_exists(&params.username).await? {
            return Err(AppError::Conflict(USERNAME_TAKEN_MESSAGE.to_string()));
        }

        let password_hash = hash_password(params.password, self.auth.bcrypt_cost).await?;
        let user = user_repo
            .create(CreateUserParams {
                username: params.username,
                password_hash,
                first_name: params.first_name,
                last_name: params.last_name,
                email: params.email,
                phone: params.phone,
                admin: false,
                room_id: None,
            })
            .await?;

        tracing::info!(user_id = user.id, "Registered user {}", user.username);

        Ok(user)
    }

    /// Checks credentials and issues a token.
    ///
    /// Unknown usernames and wrong passwords fail with the same error.
    ///
    /// # Returns
    /// - `Ok((User, token))` - Authenticated user and signed JWT
    /// - `Err(AuthError::InvalidCredentials)` - Unknown user or wrong password
    pub async fn login(&self, username: &str, password: String) -> Result<(User, String), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some((user, hash)) = user_repo.find_with_hash_by_username(username.trim()).await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = issue_token(self.auth, &user)?;

        Ok((user, token))
    }

    /// Replaces the password after verifying the current one.
    ///
    /// Every token issued before the change stops working.
    ///
    /// # Returns
    /// - `Ok(String)` - Fresh token for the caller
    /// - `Err(AuthError::InvalidCredentials)` - Current password is wrong
    pub async fn change_password(
        &self,
        user_id: i32,
        current_password: String,
        new_password: String,
    ) -> Result<String, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(hash) = user_repo.find_hash_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !verify_password(current_password, hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let new_hash = hash_password(new_password, self.auth.bcrypt_cost).await?;
        user_repo.update_password_hash(user_id, new_hash).await?;

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };
        tracing::info!(user_id, "Password changed; earlier tokens revoked");

        issue_token(self.auth, &user)
    }

    /// Creates the configured admin account when no admin exists yet.
    ///
    /// # Returns
    /// - `Ok(true)` - Admin account created
    /// - `Ok(false)` - An admin already exists or the username is taken
    pub async fn seed_admin(&self, username: &str, password: String) -> Result<bool, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.admin_exists().await? {
            return Ok(false);
        }
        if user_repo.username_exists(username).await? {
            tracing::warn!(
                "Cannot seed admin: username {} belongs to a regular account",
                username
            );
            return Ok(false);
        }

        let password_hash = hash_password(password, self.auth.bcrypt_cost).await?;
        user_repo
            .create(CreateUserParams {
                username: username.to_string(),
                password_hash,
                first_name: "ผู้ดูแล".to_string(),
                last_name: "ระบบ".to_string(),
                email: None,
                phone: None,
                admin: true,
                room_id: None,
            })
            .await?;

        tracing::info!("Seeded admin account {}", username);

        Ok(true)
    }
}
