use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_URL: &str = "http://localhost:8080";
const DEFAULT_UPLOAD_DIR: &str = "uploads";

pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,
    pub bcrypt_cost: u32,
    pub cookie_secure: bool,

    pub app_url: String,

    pub s3_bucket: Option<String>,
    pub s3_public_url: Option<String>,
    pub upload_dir: String,

    pub mail_from: Option<String>,

    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_expiry_hours: parsed_or("JWT_EXPIRY_HOURS", 24)?,
            bcrypt_cost: parsed_or("BCRYPT_COST", bcrypt::DEFAULT_COST)?,
            cookie_secure: parsed_or("COOKIE_SECURE", false)?,
            app_url: optional("APP_URL").unwrap_or_else(|| DEFAULT_APP_URL.to_string()),
            s3_bucket: optional("S3_BUCKET"),
            s3_public_url: optional("S3_PUBLIC_URL"),
            upload_dir: optional("UPLOAD_DIR").unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string()),
            mail_from: optional("MAIL_FROM"),
            admin_username: optional("ADMIN_USERNAME"),
            admin_password: optional("ADMIN_PASSWORD"),
        })
    }

    pub fn auth(&self) -> AuthConfig {
        AuthConfig {
            jwt_secret: self.jwt_secret.clone(),
            jwt_expiry_hours: self.jwt_expiry_hours,
            bcrypt_cost: self.bcrypt_cost,
            cookie_secure: self.cookie_secure,
        }
    }
}

/// The part of the configuration request handlers need for authentication.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,
    pub bcrypt_cost: u32,
    pub cookie_secure: bool,
}

fn required(name: &str) -> Result<String, ConfigError> {
    optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Unset and empty variables are both treated as absent.
fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parsed_or<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match optional(name) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        None => Ok(default),
    }
}
