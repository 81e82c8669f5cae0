use crate::server::config::AuthConfig;

mod auth;
mod bill;
mod chat;
mod parcel;
mod queue;
mod room;
mod room_type;
mod task;
mod user;

/// A 5-byte "png" as a data URL; content is not inspected.
const PNG_DATA_URL: &str = "data:image/png;base64,aGVsbG8=";

fn auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "service-test-secret".to_string(),
        jwt_expiry_hours: 1,
        bcrypt_cost: 4,
        cookie_secure: false,
    }
}
