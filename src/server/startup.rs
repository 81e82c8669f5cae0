use std::sync::Arc;

use dioxus_logger::tracing;

use crate::server::{
    config::Config,
    error::AppError,
    mail::{log::LogMailer, ses::SesMailer, Mailer},
    service::auth::AuthService,
    storage::{local::LocalStorage, s3::S3Storage, ObjectStorage},
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up to date before any request is
/// served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Picks the upload backend: S3 when `S3_BUCKET` is set, the local upload directory otherwise.
///
/// AWS credentials and region come from the standard AWS environment and profile chain.
pub async fn build_storage(config: &Config) -> Arc<dyn ObjectStorage> {
    match &config.s3_bucket {
        Some(bucket) => {
            let aws = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            tracing::info!("Storing uploads in S3 bucket {}", bucket);
            Arc::new(S3Storage::new(
                aws_sdk_s3::Client::new(&aws),
                bucket.clone(),
                config.s3_public_url.clone(),
            ))
        }
        None => {
            tracing::info!("Storing uploads in {}", config.upload_dir);
            Arc::new(LocalStorage::new(&config.upload_dir))
        }
    }
}

/// Picks the mailer: SES when `MAIL_FROM` is set, otherwise messages are only logged.
pub async fn build_mailer(config: &Config) -> Arc<dyn Mailer> {
    match &config.mail_from {
        Some(from) => {
            let aws = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            tracing::info!("Sending mail through SES as {}", from);
            Arc::new(SesMailer::new(aws_sdk_sesv2::Client::new(&aws), from.clone()))
        }
        None => {
            tracing::warn!("MAIL_FROM not set, outgoing mail will only be logged");
            Arc::new(LogMailer)
        }
    }
}

/// Creates the first admin account from `ADMIN_USERNAME`/`ADMIN_PASSWORD` when no admin
/// exists yet.
///
/// Without those variables and without an admin, logs how to create one; the app still
/// starts since tenants and visitors do not need an admin.
pub async fn seed_admin(db: &sea_orm::DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let (Some(username), Some(password)) = (&config.admin_username, &config.admin_password)
    else {
        if !crate::server::data::user::UserRepository::new(db)
            .admin_exists()
            .await?
        {
            tracing::warn!(
                "No admin account exists. Set ADMIN_USERNAME and ADMIN_PASSWORD to create one"
            );
        }
        return Ok(());
    };

    AuthService::new(db, &config.auth())
        .seed_admin(username, password.clone())
        .await?;

    Ok(())
}
