//! Decoding and checking of uploaded images.

use base64::Engine;

use crate::server::error::AppError;

/// Largest accepted image, 5 MiB.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

const INVALID_IMAGE_MESSAGE: &str = "รองรับเฉพาะไฟล์รูปภาพ png, jpg, jpeg หรือ webp";

#[derive(Debug, PartialEq)]
pub struct DecodedImage {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub extension: &'static str,
}

/// Maps a file extension or MIME subtype to the stored `(content_type, extension)` pair.
fn image_format(name: &str) -> Option<(&'static str, &'static str)> {
    match name.to_ascii_lowercase().as_str() {
        "png" | "image/png" => Some(("image/png", "png")),
        "jpg" | "jpeg" | "image/jpg" | "image/jpeg" => Some(("image/jpeg", "jpg")),
        "webp" | "image/webp" => Some(("image/webp", "webp")),
        _ => None,
    }
}

fn check_size(bytes: &[u8]) -> Result<(), AppError> {
    if bytes.is_empty() {
        return Err(AppError::BadRequest("ไฟล์ว่างเปล่า".to_string()));
    }
    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(AppError::BadRequest(
            "ไฟล์มีขนาดใหญ่เกิน 5 MB".to_string(),
        ));
    }
    Ok(())
}

/// Decodes `data:image/<type>;base64,<payload>`.
pub fn decode_data_url(input: &str) -> Result<DecodedImage, AppError> {
    let invalid = || AppError::BadRequest(INVALID_IMAGE_MESSAGE.to_string());

    let rest = input.strip_prefix("data:").ok_or_else(invalid)?;
    let (meta, payload) = rest.split_once(',').ok_or_else(invalid)?;
    let mime = meta.strip_suffix(";base64").ok_or_else(invalid)?;
    let (content_type, extension) = image_format(mime).ok_or_else(invalid)?;

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|_| invalid())?;
    check_size(&bytes)?;

    Ok(DecodedImage {
        bytes,
        content_type,
        extension,
    })
}

/// Checks a multipart file by its file name extension.
pub fn from_upload(file_name: &str, bytes: Vec<u8>) -> Result<DecodedImage, AppError> {
    let ext = std::path::Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    let (content_type, extension) = image_format(ext)
        .ok_or_else(|| AppError::BadRequest(INVALID_IMAGE_MESSAGE.to_string()))?;
    check_size(&bytes)?;

    Ok(DecodedImage {
        bytes,
        content_type,
        extension,
    })
}
