//! Router-level tests driving the real axum router with `oneshot`.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::server::{
    config::AuthConfig,
    mail::recording::RecordingMailer,
    middleware::auth::issue_token,
    model::user::User,
    router::router,
    state::AppState,
    storage::memory::MemoryStorage,
};
use test_utils::{builder::TestBuilder, factory};


fn auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "controller-test-secret".to_string(),
        jwt_expiry_hours: 1,
        bcrypt_cost: 4,
        cookie_secure: false,
    }
}

/// Router, storage and mailer over the test database.
struct TestApp {
    router: Router,
    storage: Arc<MemoryStorage>,
    mailer: Arc<RecordingMailer>,
}

impl TestApp {
    fn new(db: &DatabaseConnection) -> Self {
        let storage = Arc::new(MemoryStorage::new());
        let mailer = Arc::new(RecordingMailer::new());
        let state = AppState::new(
            db.clone(),
            auth_config(),
            storage.clone(),
            mailer.clone(),
            "https://dorm.test".to_string(),
        );

        Self {
            router: router("uploads").with_state(state),
            storage,
            mailer,
        }
    }

    /// Sends a request and returns the status with the JSON body (`Null` when empty).
    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body)
    }
}

/// Cookie header value logging in `user`.
fn session_for(user: &entity::user::Model) -> String {
    let token = issue_token(&auth_config(), &User::from_entity(user.clone())).unwrap();
    format!("token={}", token)
}

fn json_request(method: Method, uri: &str, cookie: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}
