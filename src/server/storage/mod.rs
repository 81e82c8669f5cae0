//! Object storage for uploaded images.
//!
//! Uploads are stored under `uploads/<uuid>.<ext>` either in an S3 bucket or on local disk.
//! Both return the public URL that is saved in the database.

pub mod local;
#[cfg(test)]
pub mod memory;
pub mod s3;

use async_trait::async_trait;
use url::Url;

use crate::server::{
    error::{storage::StorageError, AppError},
    util::image::{self, DecodedImage},
};

/// Key prefix for every uploaded object.
pub const UPLOAD_PREFIX: &str = "uploads";

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Stores `bytes` at `key` and returns the URL clients fetch it from.
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<String, StorageError>;
}

/// Uploads a decoded image under a fresh key and returns its public URL.
pub async fn store_image(
    storage: &dyn ObjectStorage,
    image: DecodedImage,
) -> Result<String, AppError> {
    let key = format!("{}/{}.{}", UPLOAD_PREFIX, uuid::Uuid::new_v4(), image.extension);
    let url = storage.put(&key, image.bytes, image.content_type).await?;

    Ok(url)
}

/// Resolves an image field from a request body to a URL to persist.
///
/// `http(s)` URLs and paths of earlier local uploads are kept as they are; `data:` URLs are
/// decoded, checked and uploaded. Any other site-relative path is rejected.
pub async fn resolve_image(storage: &dyn ObjectStorage, input: &str) -> Result<String, AppError> {
    let input = input.trim();

    if input.starts_with('/') {
        if !is_local_upload(input) {
            return Err(AppError::BadRequest("ที่อยู่รูปภาพไม่ถูกต้อง".to_string()));
        }
        return Ok(input.to_string());
    }
    if input.starts_with("http://") || input.starts_with("https://") {
        return match Url::parse(input) {
            Ok(url) if url.host_str().is_some() => Ok(url.to_string()),
            _ => Err(AppError::BadRequest("URL รูปภาพไม่ถูกต้อง".to_string())),
        };
    }

    let decoded = image::decode_data_url(input)?;
    store_image(storage, decoded).await
}

/// `/uploads/<file>` with plain segments only, as returned by the local backend.
fn is_local_upload(path: &str) -> bool {
    path.strip_prefix('/')
        .and_then(|p| p.strip_prefix(UPLOAD_PREFIX))
        .and_then(|p| p.strip_prefix('/'))
        .is_some_and(|rest| {
            rest.split('/').all(|segment| {
                !segment.is_empty()
                    && segment != "."
                    && segment != ".."
                    && segment
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            })
        })
}

/// Like [`resolve_image`] but maps `None` and blank input to `None`.
pub async fn resolve_optional_image(
    storage: &dyn ObjectStorage,
    input: Option<&str>,
) -> Result<Option<String>, AppError> {
    match input.map(str::trim).filter(|s| !s.is_empty()) {
        Some(input) => Ok(Some(resolve_image(storage, input).await?)),
        None => Ok(None),
    }
}
