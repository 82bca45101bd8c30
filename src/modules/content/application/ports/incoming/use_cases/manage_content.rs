use async_trait::async_trait;
use uuid::Uuid;

use crate::content::domain::{ContentKind, ContentRecord, Stored, ValidationError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0} record not found")]
    NotFound(ContentKind),

    #[error("{0} already exists")]
    SingletonExists(ContentKind),

    #[error("Content store unavailable: {0}")]
    StoreUnavailable(String),
}

/// Repository operations for one content type.
#[async_trait]
pub trait ManageContent<T: ContentRecord>: Send + Sync {
    /// Public read. Never fails: store errors and empty collections fall
    /// back to the built-in defaults.
    async fn list(&self) -> Vec<Stored<T>>;

    /// Admin read. Store errors surface.
    async fn list_stored(&self) -> Result<Vec<Stored<T>>, ContentError>;

    async fn create(&self, record: T) -> Result<Stored<T>, ContentError>;

    async fn update(&self, id: Uuid, record: T) -> Result<Stored<T>, ContentError>;

    /// Deleting an absent id is not an error.
    async fn delete(&self, id: Uuid) -> Result<(), ContentError>;

    async fn clear(&self) -> Result<u64, ContentError>;

    /// Create-or-replace for singleton kinds.
    async fn put_singleton(&self, record: T) -> Result<Stored<T>, ContentError>;
}
