//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into each handler through Axum's state
//! extraction. Storage and mailer sit behind `Arc<dyn ...>` so the backend (S3 or disk, SES
//! or log) is chosen at startup without handlers knowing which.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{config::AuthConfig, mail::Mailer, storage::ObjectStorage};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// JWT and password hashing settings.
    pub auth: AuthConfig,

    /// Where uploaded images are written.
    pub storage: Arc<dyn ObjectStorage>,

    /// Outgoing email for bill and parcel notifications.
    pub mailer: Arc<dyn Mailer>,

    /// Public base URL, used for links in emails.
    pub app_url: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        auth: AuthConfig,
        storage: Arc<dyn ObjectStorage>,
        mailer: Arc<dyn Mailer>,
        app_url: String,
    ) -> Self {
        Self {
            db,
            auth,
            storage,
            mailer,
            app_url,
        }
    }
}
