//! JWT authentication and access checks.
//!
//! Tokens are HS256 JWTs carried in the `token` cookie or an `Authorization: Bearer` header.
//! [`AuthGuard`] resolves the token to a user that still exists and checks permissions.

use axum::http::{header, HeaderMap};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use crate::server::{
    config::AuthConfig,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    util::cookie::{read_cookie, AUTH_COOKIE_NAME},
};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID.
    pub sub: String,
    pub admin: bool,
    /// The user's `token_version` at signing time.
    pub ver: i32,
    pub iat: i64,
    pub exp: i64,
}

/// Signs a token for `user` valid for the configured number of hours.
pub fn issue_token(auth: &AuthConfig, user: &User) -> Result<String, AppError> {
    let now = Utc::now();
    let claims = Claims {
        sub: user.id.to_string(),
        admin: user.admin,
        ver: user.token_version,
        iat: now.timestamp(),
        exp: (now + Duration::hours(auth.jwt_expiry_hours)).timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(auth.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalError(format!("Failed to sign token: {}", e)))
}

/// Verifies signature and expiry and returns the user ID from `sub`.
pub fn decode_token(auth: &AuthConfig, token: &str) -> Result<i32, AuthError> {
    decode_subject(auth, token).map(|(user_id, _)| user_id)
}

/// Verifies the token and returns the user ID with the token version it was signed for.
fn decode_subject(auth: &AuthConfig, token: &str) -> Result<(i32, i32), AuthError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(auth.jwt_secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

    let user_id = data
        .claims
        .sub
        .parse()
        .map_err(|_| AuthError::InvalidToken(format!("Malformed subject '{}'", data.claims.sub)))?;

    Ok((user_id, data.claims.ver))
}

/// The cookie wins over the bearer header when both are present.
fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = read_cookie(headers, AUTH_COOKIE_NAME) {
        return Some(token);
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

pub enum Permission {
    Admin,
    /// Admin, or the account belonging to the room.
    Room(i32),
    /// Admin, or the owner of the chat thread.
    Thread(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    auth: &'a AuthConfig,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, auth: &'a AuthConfig, headers: &'a HeaderMap) -> Self {
        Self { db, auth, headers }
    }

    /// Returns the logged-in user if every permission holds.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user with the required permissions
    /// - `Err(AuthError::MissingToken | InvalidToken | UserNotInDatabase)` - Not logged in (401),
    ///   including tokens issued before the last password change
    /// - `Err(AuthError::AccessDenied)` - Logged in without permission (403)
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(token) = token_from_headers(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };
        let (user_id, version) = decode_subject(self.auth, &token)?;

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };
        if version != user.token_version {
            return Err(AuthError::InvalidToken(format!(
                "Token version {} revoked for user {}",
                version, user.id
            ))
            .into());
        }

        if user.admin {
            return Ok(user);
        }

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    return Err(AuthError::AccessDenied(
                        user.id,
                        "Admin permission required".to_string(),
                    )
                    .into());
                }
                Permission::Room(room_id) => {
                    if user.room_id != Some(*room_id) {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!("Account is not the account of room {}", room_id),
                        )
                        .into());
                    }
                }
                Permission::Thread(owner_id) => {
                    if user.id != *owner_id {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!("Not the owner of chat thread {}", owner_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
