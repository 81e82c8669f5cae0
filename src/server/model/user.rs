//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::{
    auth::RegisterDto,
    user::{UpdateProfileDto, UserDto},
};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub admin: bool,
    /// Set when this is a room's own account.
    pub room_id: Option<i32>,
    /// Tokens carrying an older version are rejected.
    pub token_version: i32,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone: entity.phone,
            admin: entity.admin,
            room_id: entity.room_id,
            token_version: entity.token_version,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            admin: self.admin,
            room_id: self.room_id,
            created_at: self.created_at,
        }
    }
}

/// Blank optional text becomes `None`.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parameters for creating a user account.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    /// bcrypt hash, never the plain password.
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub admin: bool,
    pub room_id: Option<i32>,
}

/// Self-registration input, password still in plain text.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl RegisterParams {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            username: dto.username.trim().to_string(),
            password: dto.password,
            first_name: dto.first_name.trim().to_string(),
            last_name: dto.last_name.trim().to_string(),
            email: normalize_optional(dto.email),
            phone: normalize_optional(dto.phone),
        }
    }
}

/// Profile fields a user may change about themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileParams {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ProfileParams {
    pub fn from_dto(dto: UpdateProfileDto) -> Self {
        Self {
            first_name: dto.first_name.trim().to_string(),
            last_name: dto.last_name.trim().to_string(),
            email: normalize_optional(dto.email),
            phone: normalize_optional(dto.phone),
        }
    }

    /// Profile of a room account with no tenant.
    pub fn vacant(room_number: &str) -> Self {
        Self {
            first_name: "ห้อง".to_string(),
            last_name: room_number.to_string(),
            email: None,
            phone: None,
        }
    }
}
