use thiserror::Error;

/// Errors related to the core types of the URL shortener.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid short id: {0}")]
    InvalidShortId(String),
}

/// Failures reported by a record store backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage backend rejected the request: {0}")]
    Rejected(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Error kinds surfaced by the create and resolve services.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("short id not found: {0}")]
    NotFound(String),
    #[error("persistence failure: {0}")]
    Persistence(#[from] StorageError),
    #[error("short id {id} already maps to {existing_url}")]
    Collision { id: String, existing_url: String },
}
