use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::server::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    service::dashboard::DashboardService,
    state::AppState,
};

/// GET /api/dashboard/stats - Occupancy, billing and workload counters
///
/// # Access Control
/// - `Admin`
pub async fn get_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;

    let stats = DashboardService::new(&state.db).stats().await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}
