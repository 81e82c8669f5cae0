use thiserror::Error;

/// Errors raised while preparing a test database.
#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
