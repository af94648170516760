use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object already exists: {key}")]
    AlreadyExists { key: String },

    #[error("S3 PutObject error: {0}")]
    PutObject(String),
}
