use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::landing_page::UpdateLandingPageDto,
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::landing_page::UpdateLandingPageParams,
        service::landing_page::LandingPageService,
        state::AppState,
    },
};

/// GET /api/landing-page
pub async fn get_landing_page(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let page = LandingPageService::new(&state.db, state.storage.as_ref())
        .get()
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// PUT /api/landing-page
///
/// # Access Control
/// - `Admin`
pub async fn update_landing_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateLandingPageDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[Permission::Admin])
        .await?;
    payload.validate()?;

    let page = LandingPageService::new(&state.db, state.storage.as_ref())
        .update(UpdateLandingPageParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}
