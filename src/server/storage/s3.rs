use async_trait::async_trait;
use aws_sdk_s3::Client as S3Client;
use dioxus_logger::tracing;

use crate::server::{error::storage::StorageError, storage::ObjectStorage};

pub struct S3Storage {
    client: S3Client,
    bucket: String,
    /// Base URL objects are publicly served from, without trailing slash.
    public_url: String,
}

impl S3Storage {
    /// Creates the storage. Without an explicit public URL the bucket's virtual-hosted
    /// endpoint is used.
    pub fn new(client: S3Client, bucket: String, public_url: Option<String>) -> Self {
        let public_url = public_url
            .unwrap_or_else(|| format!("https://{}.s3.amazonaws.com", bucket))
            .trim_end_matches('/')
            .to_string();

        Self {
            client,
            bucket,
            public_url,
        }
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<String, StorageError> {
        let size = bytes.len();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(bytes.into())
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| StorageError::S3 {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        tracing::info!(key = key, size = size, "Uploaded object to S3");

        Ok(format!("{}/{}", self.public_url, key))
    }
}
