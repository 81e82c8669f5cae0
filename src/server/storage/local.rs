use std::path::PathBuf;

use async_trait::async_trait;
use dioxus_logger::tracing;

use crate::server::{
    error::storage::StorageError,
    storage::{ObjectStorage, UPLOAD_PREFIX},
};

/// Stores uploads in a local directory served by the router at `/uploads`.
pub struct LocalStorage {
    dir: PathBuf,
}

impl LocalStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl ObjectStorage for LocalStorage {
    async fn put(&self, key: &str, bytes: Vec<u8>, _content_type: &str) -> Result<String, StorageError> {
        let file_name = key
            .strip_prefix(UPLOAD_PREFIX)
            .map(|rest| rest.trim_start_matches('/'))
            .unwrap_or(key);
        let path = self.dir.join(file_name);

        let io_err = |source| StorageError::Io {
            path: path.display().to_string(),
            source,
        };

        tokio::fs::create_dir_all(&self.dir).await.map_err(io_err)?;
        tokio::fs::write(&path, &bytes).await.map_err(io_err)?;

        tracing::info!(path = %path.display(), size = bytes.len(), "Stored upload on disk");

        Ok(format!("/{}/{}", UPLOAD_PREFIX, file_name))
    }
}
