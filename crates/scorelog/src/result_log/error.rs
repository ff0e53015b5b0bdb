use thiserror::Error;

/// Result log related errors
#[derive(Error, Debug)]
pub enum LogError {
    #[error("Storage error: {0}")]
    StorageError(#[from] crate::storage::StorageError),

    #[error("Malformed log document {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type for result log operations
pub type Result<T> = std::result::Result<T, LogError>;
