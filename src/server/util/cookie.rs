//! The `token` auth cookie.

use axum::http::{header, HeaderMap, HeaderValue};

use crate::server::{config::AuthConfig, error::AppError};

pub const AUTH_COOKIE_NAME: &str = "token";

/// Builds the `Set-Cookie` value carrying a freshly issued token.
pub fn auth_cookie(token: &str, auth: &AuthConfig) -> Result<HeaderValue, AppError> {
    let max_age = auth.jwt_expiry_hours * 3600;
    let cookie = format!(
        "{}={}; HttpOnly; Path=/; Max-Age={}; SameSite=Lax",
        AUTH_COOKIE_NAME, token, max_age
    );

    build(cookie, auth.cookie_secure)
}

/// Builds the `Set-Cookie` value that removes the auth cookie.
pub fn clear_auth_cookie(auth: &AuthConfig) -> Result<HeaderValue, AppError> {
    let cookie = format!("{}=; HttpOnly; Path=/; Max-Age=0; SameSite=Lax", AUTH_COOKIE_NAME);

    build(cookie, auth.cookie_secure)
}

fn build(mut cookie: String, secure: bool) -> Result<HeaderValue, AppError> {
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
        .map_err(|e| AppError::InternalError(format!("Invalid cookie header: {}", e)))
}

/// Reads a cookie by name from every `Cookie` header of the request.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}
