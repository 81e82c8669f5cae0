use super::auth_config;
use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::decode_token,
    model::user::RegisterParams,
    service::auth::AuthService,
};
use test_utils::builder::TestBuilder;

mod login;
mod register;

fn register_params(username: &str, password: &str) -> RegisterParams {
    RegisterParams {
        username: username.to_string(),
        password: password.to_string(),
        first_name: "Somchai".to_string(),
        last_name: "Jaidee".to_string(),
        email: None,
        phone: None,
    }
}
