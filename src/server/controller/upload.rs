use axum::{
    extract::{Multipart, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;

use crate::{
    model::api::UploadDto,
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        state::AppState,
        storage::store_image,
        util::image::from_upload,
    },
};

/// Multipart field holding the file.
const FILE_FIELD: &str = "file";

/// POST /api/upload - Store an image sent as multipart form data
///
/// Accepts png, jpg, jpeg and webp up to 5 MiB in the `file` field.
///
/// # Returns
/// - `201 Created` - `{url}` of the stored image
/// - `400 Bad Request` - Missing field, unsupported type, empty or oversized file
/// - `401 Unauthorized` - Not logged in
pub async fn upload(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.auth, &headers)
        .require(&[])
        .await?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let image = from_upload(&file_name, bytes.to_vec())?;
        let url = store_image(state.storage.as_ref(), image).await?;

        tracing::info!(user_id = user.id, url = %url, "Stored upload");

        return Ok((StatusCode::CREATED, Json(UploadDto { url })));
    }

    Err(AppError::BadRequest("ไม่พบไฟล์ที่อัปโหลด".to_string()))
}
