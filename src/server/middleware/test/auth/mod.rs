use axum::http::{header, HeaderMap, HeaderValue};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    config::AuthConfig,
    error::{auth::AuthError, AppError},
    middleware::auth::{decode_token, issue_token, AuthGuard, Permission},
    model::user::User,
};

mod require;
mod token;

fn auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "test-secret".to_string(),
        jwt_expiry_hours: 1,
        bcrypt_cost: 4,
        cookie_secure: false,
    }
}

fn cookie_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        HeaderValue::from_str(&format!("theme=dark; token={}", token)).unwrap(),
    );
    headers
}

fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
