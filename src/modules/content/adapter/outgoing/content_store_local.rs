//! Process-local content store.
//!
//! Each content kind is one collection that is read whole, changed in memory
//! and written back whole. When a snapshot path is configured the complete
//! store is rewritten to that JSON file after every mutation, keyed by the
//! collection's storage key.
//!
//! A mutation runs on its own task, so a caller that stops waiting (for
//! example on a store timeout) never leaves the snapshot and the in-memory
//! copy disagreeing.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::content::{
    application::ports::outgoing::{ContentStore, ContentStoreError, StoredDocument},
    domain::ContentKind,
};

type Collections = HashMap<ContentKind, Vec<StoredDocument>>;

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotEntry {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    payload: Value,
}

impl From<&StoredDocument> for SnapshotEntry {
    fn from(doc: &StoredDocument) -> Self {
        Self {
            id: doc.id,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
            payload: doc.payload.clone(),
        }
    }
}

impl From<SnapshotEntry> for StoredDocument {
    fn from(entry: SnapshotEntry) -> Self {
        Self {
            id: entry.id,
            payload: entry.payload,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}

#[derive(Debug, Default)]
pub struct LocalContentStore {
    collections: Arc<RwLock<Collections>>,
    snapshot: Option<Arc<PathBuf>>,
}

impl LocalContentStore {
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Opens a store backed by a snapshot file. A missing file starts empty.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, ContentStoreError> {
        let path = path.into();

        let collections = match tokio::fs::read(&path).await {
            Ok(bytes) => Self::parse_snapshot(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Collections::new(),
            Err(e) => return Err(ContentStoreError::Unavailable(e.to_string())),
        };

        info!(path = %path.display(), "Local content store opened");

        Ok(Self {
            collections: Arc::new(RwLock::new(collections)),
            snapshot: Some(Arc::new(path)),
        })
    }

    fn parse_snapshot(bytes: &[u8]) -> Result<Collections, ContentStoreError> {
        let mut raw: BTreeMap<String, Vec<SnapshotEntry>> = serde_json::from_slice(bytes)
            .map_err(|e| ContentStoreError::Serialization(e.to_string()))?;

        Ok(ContentKind::ALL
            .iter()
            .filter_map(|kind| {
                raw.remove(kind.storage_key()).map(|entries| {
                    (*kind, entries.into_iter().map(StoredDocument::from).collect())
                })
            })
            .collect())
    }

    /// Replaces one collection wholesale. The in-memory copy only changes once
    /// the snapshot (if any) is written, and both happen on a spawned task that
    /// runs to completion even if the caller is dropped.
    async fn replace<R, F>(&self, kind: ContentKind, mutate: F) -> Result<R, ContentStoreError>
    where
        R: Send + 'static,
        F: FnOnce(&mut Vec<StoredDocument>) -> Result<R, ContentStoreError> + Send + 'static,
    {
        let collections = Arc::clone(&self.collections);
        let snapshot = self.snapshot.clone();

        tokio::spawn(async move {
            let mut guard = collections.write_owned().await;

            let mut collection = guard.get(&kind).cloned().unwrap_or_default();
            let result = mutate(&mut collection)?;

            let mut next = guard.clone();
            next.insert(kind, collection);
            if let Some(path) = snapshot.as_deref() {
                write_snapshot(path, &next).await?;
            }
            *guard = next;

            Ok::<R, ContentStoreError>(result)
        })
        .await
        .map_err(|e| ContentStoreError::Unavailable(e.to_string()))?
    }
}

async fn write_snapshot(path: &Path, collections: &Collections) -> Result<(), ContentStoreError> {
    let raw: BTreeMap<&str, Vec<SnapshotEntry>> = collections
        .iter()
        .map(|(kind, docs)| (kind.storage_key(), docs.iter().map(SnapshotEntry::from).collect()))
        .collect();
    let bytes = serde_json::to_vec_pretty(&raw)
        .map_err(|e| ContentStoreError::Serialization(e.to_string()))?;

    let tmp = path.with_extension("tmp");
    tokio::fs::write(&tmp, bytes)
        .await
        .map_err(|e| ContentStoreError::Unavailable(e.to_string()))?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|e| ContentStoreError::Unavailable(e.to_string()))
}

#[async_trait]
impl ContentStore for LocalContentStore {
    async fn list(&self, kind: ContentKind) -> Result<Vec<StoredDocument>, ContentStoreError> {
        Ok(self
            .collections
            .read()
            .await
            .get(&kind)
            .cloned()
            .unwrap_or_default())
    }

    async fn insert(
        &self,
        kind: ContentKind,
        payload: Value,
    ) -> Result<StoredDocument, ContentStoreError> {
        let now = Utc::now();
        let document = StoredDocument {
            id: Uuid::new_v4(),
            payload,
            created_at: now,
            updated_at: now,
        };

        self.replace(kind, move |collection| {
            collection.insert(0, document.clone());
            Ok(document)
        })
        .await
    }

    async fn update(
        &self,
        kind: ContentKind,
        id: Uuid,
        payload: Value,
    ) -> Result<StoredDocument, ContentStoreError> {
        self.replace(kind, move |collection| {
            let document = collection
                .iter_mut()
                .find(|doc| doc.id == id)
                .ok_or(ContentStoreError::NotFound)?;

            document.payload = payload;
            document.updated_at = Utc::now();
            Ok(document.clone())
        })
        .await
    }

    async fn delete(&self, kind: ContentKind, id: Uuid) -> Result<bool, ContentStoreError> {
        self.replace(kind, move |collection| {
            let before = collection.len();
            collection.retain(|doc| doc.id != id);
            Ok(collection.len() != before)
        })
        .await
    }

    async fn clear(&self, kind: ContentKind) -> Result<u64, ContentStoreError> {
        self.replace(kind, move |collection| {
            let removed = collection.len() as u64;
            collection.clear();
            Ok(removed)
        })
        .await
    }

    async fn ping(&self) -> Result<(), ContentStoreError> {
        Ok(())
    }
}
