//! Error types for document store operations.

/// Result type for document store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for document store operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<String> for StoreError {
    fn from(s: String) -> Self {
        StoreError::Backend(s)
    }
}

impl From<&str> for StoreError {
    fn from(s: &str) -> Self {
        StoreError::Backend(s.to_string())
    }
}
