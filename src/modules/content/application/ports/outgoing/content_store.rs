use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::content::domain::ContentKind;

/// A persisted JSON document with the metadata the store assigns.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: Uuid,
    pub payload: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContentStoreError {
    #[error("Record not found")]
    NotFound,

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Schema-agnostic persistence for content documents, one collection per kind.
///
/// `list` returns documents newest first by `created_at`.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn list(&self, kind: ContentKind) -> Result<Vec<StoredDocument>, ContentStoreError>;

    async fn insert(
        &self,
        kind: ContentKind,
        payload: Value,
    ) -> Result<StoredDocument, ContentStoreError>;

    /// Fails with `NotFound` when no document of `kind` has this id.
    async fn update(
        &self,
        kind: ContentKind,
        id: Uuid,
        payload: Value,
    ) -> Result<StoredDocument, ContentStoreError>;

    /// Returns whether a document was removed.
    async fn delete(&self, kind: ContentKind, id: Uuid) -> Result<bool, ContentStoreError>;

    /// Removes every document of `kind`, returning how many there were.
    async fn clear(&self, kind: ContentKind) -> Result<u64, ContentStoreError>;

    async fn ping(&self) -> Result<(), ContentStoreError>;
}
