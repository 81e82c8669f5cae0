mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::http::{header, HeaderValue, Method};
        use dioxus_logger::tracing;
        use tower_http::{cors::CorsLayer, trace::TraceLayer};

        use crate::server::{
            config::Config, error::AppError, scheduler::bill_reminder, startup, state::AppState,
        };

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let storage = startup::build_storage(&config).await;
        let mailer = startup::build_mailer(&config).await;

        startup::seed_admin(&db, &config).await?;

        let state = AppState::new(db, config.auth(), storage, mailer, config.app_url.clone());

        tracing::info!("Starting server");

        // Start overdue bill reminder scheduler
        let scheduler_state = state.clone();
        tokio::spawn(async move {
            if let Err(e) = bill_reminder::start_scheduler(scheduler_state).await {
                tracing::error!("Bill reminder scheduler error: {}", e);
            }
        });

        let origin = HeaderValue::from_str(&config.app_url)
            .map_err(|e| AppError::InternalError(format!("Invalid APP_URL: {}", e)))?;
        let cors = CorsLayer::new()
            .allow_origin(origin)
            .allow_credentials(true)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router(&config.upload_dir)
            .with_state(state)
            .layer(cors)
            .layer(TraceLayer::new_for_http());
        router = router.merge(server_routes);

        Ok(router)
    })
}
