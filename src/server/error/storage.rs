use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to upload {key} to S3: {message}")]
    S3 { key: String, message: String },

    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
