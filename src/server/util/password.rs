//! Password hashing and generation.
//!
//! bcrypt is CPU bound, so hashing and verification run on the blocking pool.

use rand::Rng;

use crate::server::error::AppError;

/// Length of generated room account passwords.
pub const GENERATED_PASSWORD_LENGTH: usize = 10;

pub async fn hash_password(password: String, cost: u32) -> Result<String, AppError> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))??;

    Ok(hash)
}

pub async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::InternalError(format!("Password verify task failed: {}", e)))??;

    Ok(matches)
}

/// Generates a random alphanumeric password without look-alike characters.
pub fn generate_password() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ\
                             abcdefghijkmnpqrstuvwxyz\
                             23456789";

    let mut rng = rand::rng();

    (0..GENERATED_PASSWORD_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
