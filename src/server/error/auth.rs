use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

pub const LOGIN_REQUIRED_MESSAGE: &str = "กรุณาเข้าสู่ระบบ";

#[derive(Error, Debug)]
pub enum AuthError {
    /// Neither the `token` cookie nor a bearer header was present.
    #[error("No auth token in request")]
    MissingToken,

    /// The token failed signature or expiry validation.
    #[error("Invalid auth token: {0}")]
    InvalidToken(String),

    /// The token is valid but its user has since been deleted.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// The user is logged in but lacks permission for the resource.
    ///
    /// # Fields
    /// - ID of the user
    /// - Reason, for the log
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Unknown username or wrong password. Both cases share one message.
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `UserNotInDatabase` → 401 asking to log in
/// - `InvalidCredentials` → 401 with the login failure message
/// - `AccessDenied` → 403
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, LOGIN_REQUIRED_MESSAGE)
            }
            Self::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "ชื่อผู้ใช้หรือรหัสผ่านไม่ถูกต้อง")
            }
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "คุณไม่มีสิทธิ์เข้าถึง"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
