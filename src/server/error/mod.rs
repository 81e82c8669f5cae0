//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by every handler. Client-facing messages are
//! Thai; internal details are logged and replaced by a generic message.

pub mod auth;
pub mod config;
pub mod mail;
pub mod storage;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, mail::MailError, storage::StorageError},
};

pub const INTERNAL_ERROR_MESSAGE: &str = "เกิดข้อผิดพลาดภายในเซิร์ฟเวอร์";

/// Top-level application error type.
///
/// Most variants convert with `#[from]`. `AuthError` maps its own status codes; the
/// message-carrying variants map to 400/404/409 and everything else becomes a 500.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Delegates to `AuthError::into_response()` (401 or 403).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Request body failed its `validator` rules. Results in 400 Bad Request listing the
    /// offending fields.
    #[error(transparent)]
    ValidationErr(#[from] validator::ValidationErrors),

    #[error(transparent)]
    StorageErr(#[from] StorageError),

    #[error(transparent)]
    MailErr(#[from] MailError),

    #[error(transparent)]
    BcryptErr(#[from] bcrypt::BcryptError),

    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// The request clashes with current state (duplicate, occupied, already final).
    /// Results in 409 Conflict with the provided message.
    #[error("{0}")]
    Conflict(String),

    /// Results in 500 Internal Server Error. The message is logged, not returned.
    #[error("{0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ValidationErr(errors) => {
                let mut fields: Vec<String> =
                    errors.errors().keys().map(|field| field.to_string()).collect();
                fields.sort();

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: format!("ข้อมูลไม่ถูกต้อง: {}", fields.join(", ")),
                    }),
                )
                    .into_response()
            }
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: INTERNAL_ERROR_MESSAGE.to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a logged 500 response with a generic body.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: INTERNAL_ERROR_MESSAGE.to_string(),
            }),
        )
            .into_response()
    }
}
