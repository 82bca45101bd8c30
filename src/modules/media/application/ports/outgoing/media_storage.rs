use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MediaStorageError {
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Persists file bytes and returns a reference usable as a link.
#[async_trait]
pub trait MediaStorage: Send + Sync {
    async fn store(&self, content_type: &str, bytes: &[u8]) -> Result<String, MediaStorageError>;
}
