use async_trait::async_trait;
use serde_json::Value;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::content::{
    application::ports::{
        incoming::use_cases::{ContentError, ManageContent},
        outgoing::{ContentStore, ContentStoreError, StoredDocument},
    },
    domain::{ContentRecord, Stored},
};

/// Generic content repository. One instance per record type, all sharing a store.
pub struct ContentService<T> {
    store: Arc<dyn ContentStore>,
    timeout: Duration,
    _record: PhantomData<fn() -> T>,
}

impl<T: ContentRecord> ContentService<T> {
    pub fn new(store: Arc<dyn ContentStore>, timeout: Duration) -> Self {
        Self {
            store,
            timeout,
            _record: PhantomData,
        }
    }

    async fn bounded<R>(
        &self,
        call: impl Future<Output = Result<R, ContentStoreError>>,
    ) -> Result<R, ContentStoreError> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(ContentStoreError::Unavailable(format!(
                "timed out after {}ms",
                self.timeout.as_millis()
            ))),
        }
    }

    fn decode(document: StoredDocument) -> Result<Stored<T>, ContentStoreError> {
        let record = serde_json::from_value(document.payload)
            .map_err(|e| ContentStoreError::Serialization(e.to_string()))?;

        Ok(Stored {
            id: document.id,
            created_at: document.created_at,
            updated_at: document.updated_at,
            record,
        })
    }

    fn encode(record: &T) -> Result<Value, ContentError> {
        serde_json::to_value(record).map_err(|e| ContentError::StoreUnavailable(e.to_string()))
    }

    /// Decodes and orders a collection. Documents that no longer decode are
    /// skipped so one bad row cannot hide the rest.
    fn decode_all(documents: Vec<StoredDocument>) -> Vec<Stored<T>> {
        let mut records: Vec<Stored<T>> = documents
            .into_iter()
            .filter_map(|document| {
                let id = document.id;
                Self::decode(document)
                    .map_err(|e| warn!(kind = %T::KIND, %id, error = %e, "Skipping undecodable record"))
                    .ok()
            })
            .collect();

        records.sort_by(|a, b| b.ordering_key().cmp(&a.ordering_key()));
        records
    }

    fn builtin_defaults() -> Vec<Stored<T>> {
        T::defaults()
            .into_iter()
            .enumerate()
            .map(|(index, record)| Stored::builtin(index, record))
            .collect()
    }

    fn store_error(&self, operation: &str, err: ContentStoreError) -> ContentError {
        match err {
            ContentStoreError::NotFound => ContentError::NotFound(T::KIND),
            other => {
                error!(kind = %T::KIND, operation, error = %other, "Content store call failed");
                ContentError::StoreUnavailable(other.to_string())
            }
        }
    }
}

#[async_trait]
impl<T: ContentRecord> ManageContent<T> for ContentService<T> {
    async fn list(&self) -> Vec<Stored<T>> {
        match self.bounded(self.store.list(T::KIND)).await {
            Ok(documents) => {
                let records = Self::decode_all(documents);
                if records.is_empty() {
                    Self::builtin_defaults()
                } else {
                    records
                }
            }
            Err(e) => {
                warn!(kind = %T::KIND, error = %e, "Serving built-in content");
                Self::builtin_defaults()
            }
        }
    }

    async fn list_stored(&self) -> Result<Vec<Stored<T>>, ContentError> {
        let documents = self
            .bounded(self.store.list(T::KIND))
            .await
            .map_err(|e| self.store_error("list", e))?;

        Ok(Self::decode_all(documents))
    }

    async fn create(&self, record: T) -> Result<Stored<T>, ContentError> {
        let record = record.sanitize()?;

        if T::KIND.is_singleton() && !self.list_stored().await?.is_empty() {
            return Err(ContentError::SingletonExists(T::KIND));
        }

        let document = self
            .bounded(self.store.insert(T::KIND, Self::encode(&record)?))
            .await
            .map_err(|e| self.store_error("insert", e))?;
        let stored = Self::decode(document).map_err(|e| self.store_error("insert", e))?;

        info!(kind = %T::KIND, id = %stored.id, "Content record created");
        Ok(stored)
    }

    async fn update(&self, id: Uuid, record: T) -> Result<Stored<T>, ContentError> {
        let record = record.sanitize()?;

        let document = self
            .bounded(self.store.update(T::KIND, id, Self::encode(&record)?))
            .await
            .map_err(|e| self.store_error("update", e))?;
        let stored = Self::decode(document).map_err(|e| self.store_error("update", e))?;

        info!(kind = %T::KIND, %id, "Content record updated");
        Ok(stored)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentError> {
        let removed = self
            .bounded(self.store.delete(T::KIND, id))
            .await
            .map_err(|e| self.store_error("delete", e))?;

        if removed {
            info!(kind = %T::KIND, %id, "Content record deleted");
        } else {
            debug!(kind = %T::KIND, %id, "Delete of absent record ignored");
        }
        Ok(())
    }

    async fn clear(&self) -> Result<u64, ContentError> {
        let removed = self
            .bounded(self.store.clear(T::KIND))
            .await
            .map_err(|e| self.store_error("clear", e))?;

        info!(kind = %T::KIND, removed, "Content collection cleared");
        Ok(removed)
    }

    async fn put_singleton(&self, record: T) -> Result<Stored<T>, ContentError> {
        let record = record.sanitize()?;

        match self.list_stored().await?.first() {
            Some(current) => self.update(current.id, record).await,
            None => self.create(record).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{
        adapter::outgoing::LocalContentStore,
        domain::{AboutProfile, BlogPost, ContactMessage, ContentKind, Skill},
    };
    use chrono::{NaiveDate, Utc};

    // ──────────────────────────────────────────────────────────
    // Stores
    // ──────────────────────────────────────────────────────────

    struct UnavailableStore;

    #[async_trait]
    impl ContentStore for UnavailableStore {
        async fn list(&self, _: ContentKind) -> Result<Vec<StoredDocument>, ContentStoreError> {
            Err(ContentStoreError::Unavailable("connection refused".into()))
        }
        async fn insert(&self, _: ContentKind, _: Value) -> Result<StoredDocument, ContentStoreError> {
            Err(ContentStoreError::Unavailable("connection refused".into()))
        }
        async fn update(
            &self,
            _: ContentKind,
            _: Uuid,
            _: Value,
        ) -> Result<StoredDocument, ContentStoreError> {
            Err(ContentStoreError::Unavailable("connection refused".into()))
        }
        async fn delete(&self, _: ContentKind, _: Uuid) -> Result<bool, ContentStoreError> {
            Err(ContentStoreError::Unavailable("connection refused".into()))
        }
        async fn clear(&self, _: ContentKind) -> Result<u64, ContentStoreError> {
            Err(ContentStoreError::Unavailable("connection refused".into()))
        }
        async fn ping(&self) -> Result<(), ContentStoreError> {
            Err(ContentStoreError::Unavailable("connection refused".into()))
        }
    }

    /// Never answers list calls.
    struct HangingStore;

    #[async_trait]
    impl ContentStore for HangingStore {
        async fn list(&self, _: ContentKind) -> Result<Vec<StoredDocument>, ContentStoreError> {
            std::future::pending().await
        }
        async fn insert(&self, _: ContentKind, _: Value) -> Result<StoredDocument, ContentStoreError> {
            std::future::pending().await
        }
        async fn update(
            &self,
            _: ContentKind,
            _: Uuid,
            _: Value,
        ) -> Result<StoredDocument, ContentStoreError> {
            std::future::pending().await
        }
        async fn delete(&self, _: ContentKind, _: Uuid) -> Result<bool, ContentStoreError> {
            std::future::pending().await
        }
        async fn clear(&self, _: ContentKind) -> Result<u64, ContentStoreError> {
            std::future::pending().await
        }
        async fn ping(&self) -> Result<(), ContentStoreError> {
            std::future::pending().await
        }
    }

    // ──────────────────────────────────────────────────────────
    // Helpers
    // ──────────────────────────────────────────────────────────

    fn service<T: ContentRecord>(store: Arc<dyn ContentStore>) -> ContentService<T> {
        ContentService::new(store, Duration::from_millis(200))
    }

    fn local<T: ContentRecord>() -> ContentService<T> {
        service(Arc::new(LocalContentStore::in_memory()))
    }

    fn skill(name: &str, level: i64) -> Skill {
        Skill {
            category: "Cloud".to_string(),
            name: name.to_string(),
            level,
        }
    }

    fn about(name: &str) -> AboutProfile {
        AboutProfile {
            name: name.to_string(),
            role: "Engineer".to_string(),
            bio: "Bio".to_string(),
            profile_image: String::new(),
            location: String::new(),
            email: String::new(),
            phone: String::new(),
            linkedin: String::new(),
            github: String::new(),
        }
    }

    // ──────────────────────────────────────────────────────────
    // Public reads
    // ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn empty_store_serves_defaults_for_showcase_content() {
        assert_eq!(local::<Skill>().list().await.len(), Skill::defaults().len());
        assert_eq!(local::<AboutProfile>().list().await.len(), 1);
        assert!(local::<ContactMessage>().list().await.is_empty());
    }

    #[tokio::test]
    async fn defaults_have_deterministic_ids() {
        let first = local::<Skill>().list().await;
        let second = local::<Skill>().list().await;

        assert_eq!(first[0].id, second[0].id);
        assert_eq!(first[0].id, Uuid::from_u128(1));
    }

    #[tokio::test]
    async fn unreachable_store_fails_open_on_public_read() {
        let svc: ContentService<Skill> = service(Arc::new(UnavailableStore));
        assert_eq!(svc.list().await.len(), Skill::defaults().len());
    }

    #[tokio::test]
    async fn hanging_store_times_out_to_defaults() {
        let svc: ContentService<BlogPost> = service(Arc::new(HangingStore));
        assert_eq!(svc.list().await.len(), BlogPost::defaults().len());
    }

    #[tokio::test]
    async fn hanging_store_surfaces_unavailable_to_admin() {
        let svc: ContentService<Skill> = service(Arc::new(HangingStore));

        let err = svc.create(skill("AWS", 10)).await.unwrap_err();
        assert!(matches!(err, ContentError::StoreUnavailable(_)));
    }

    #[tokio::test]
    async fn stored_records_replace_defaults() {
        let svc = local::<Skill>();
        svc.create(skill("Rust", 70)).await.unwrap();

        let listed = svc.list().await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].record.name, "Rust");
    }

    // ──────────────────────────────────────────────────────────
    // Mutations
    // ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn create_clamps_level_and_list_contains_equal_record() {
        let svc = local::<Skill>();

        let created = svc.create(skill("AWS", 150)).await.unwrap();
        assert_eq!(created.record.level, 100);

        let listed = svc.list_stored().await.unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn update_replaces_fields_without_duplicating() {
        let svc = local::<Skill>();
        let created = svc.create(skill("AWS", 50)).await.unwrap();

        let updated = svc.update(created.id, skill("Azure", -3)).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.record.level, 0);

        let listed = svc.list_stored().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].record.name, "Azure");
    }

    #[tokio::test]
    async fn update_of_missing_record_is_not_found() {
        let err = local::<Skill>()
            .update(Uuid::new_v4(), skill("AWS", 1))
            .await
            .unwrap_err();

        assert_eq!(err, ContentError::NotFound(ContentKind::Skill));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let svc = local::<Skill>();
        let keep = svc.create(skill("Keep", 1)).await.unwrap();
        let gone = svc.create(skill("Gone", 1)).await.unwrap();

        svc.delete(gone.id).await.unwrap();
        svc.delete(gone.id).await.unwrap();

        let listed = svc.list_stored().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, keep.id);
    }

    #[tokio::test]
    async fn invalid_record_is_rejected_before_storing() {
        let svc = local::<Skill>();

        let err = svc.create(skill("", 1)).await.unwrap_err();
        assert!(matches!(err, ContentError::Validation(_)));
        assert!(svc.list_stored().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn singleton_rejects_second_create_and_upserts() {
        let svc = local::<AboutProfile>();

        let first = svc.create(about("First")).await.unwrap();
        let err = svc.create(about("Second")).await.unwrap_err();
        assert_eq!(err, ContentError::SingletonExists(ContentKind::About));

        let replaced = svc.put_singleton(about("Second")).await.unwrap();
        assert_eq!(replaced.id, first.id);
        assert_eq!(svc.list_stored().await.unwrap().len(), 1);
        assert_eq!(svc.list().await[0].record.name, "Second");
    }

    #[tokio::test]
    async fn put_singleton_creates_when_absent() {
        let svc = local::<AboutProfile>();
        let created = svc.put_singleton(about("Only")).await.unwrap();
        assert_eq!(svc.list_stored().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn clear_removes_everything() {
        let svc = local::<ContactMessage>();
        for name in ["A", "B"] {
            svc.create(ContactMessage {
                name: name.to_string(),
                email: "a@b.co".to_string(),
                message: "hi".to_string(),
                submitted_at: Utc::now(),
            })
            .await
            .unwrap();
        }

        assert_eq!(svc.clear().await.unwrap(), 2);
        assert!(svc.list().await.is_empty());
    }

    #[tokio::test]
    async fn blog_posts_are_ordered_by_publish_date() {
        let svc = local::<BlogPost>();
        for (title, day) in [("Older", 1), ("Newer", 20), ("Middle", 10)] {
            svc.create(BlogPost {
                title: title.to_string(),
                excerpt: "x".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
                link: String::new(),
            })
            .await
            .unwrap();
        }

        let titles: Vec<_> = svc
            .list()
            .await
            .into_iter()
            .map(|p| p.record.title)
            .collect();
        assert_eq!(titles, vec!["Newer", "Middle", "Older"]);
    }
}
