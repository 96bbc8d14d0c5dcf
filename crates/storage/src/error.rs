use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("movement not found")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;
