use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, Statement,
};
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use crate::content::{
    application::ports::outgoing::{ContentStore, ContentStoreError, StoredDocument},
    domain::ContentKind,
};

use super::sea_orm_entity::{
    ActiveModel as ContentActiveModel, Column, Entity as ContentRecords, Model as ContentModel,
};

fn db_error(e: sea_orm::DbErr) -> ContentStoreError {
    ContentStoreError::Unavailable(e.to_string())
}

/// `content_records` table; every operation is scoped to one kind.
#[derive(Debug, Clone)]
pub struct PostgresContentStore {
    db: Arc<DatabaseConnection>,
}

impl PostgresContentStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentStore for PostgresContentStore {
    async fn list(&self, kind: ContentKind) -> Result<Vec<StoredDocument>, ContentStoreError> {
        let models = ContentRecords::find()
            .filter(Column::Kind.eq(kind.as_str()))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(ContentModel::to_document).collect())
    }

    async fn insert(
        &self,
        kind: ContentKind,
        payload: Value,
    ) -> Result<StoredDocument, ContentStoreError> {
        let active = ContentActiveModel {
            id: Set(Uuid::new_v4()),
            kind: Set(kind.as_str().to_string()),
            payload: Set(payload),
            ..Default::default()
        };

        let inserted: ContentModel = active.insert(&*self.db).await.map_err(db_error)?;

        Ok(inserted.to_document())
    }

    async fn update(
        &self,
        kind: ContentKind,
        id: Uuid,
        payload: Value,
    ) -> Result<StoredDocument, ContentStoreError> {
        let existing = ContentRecords::find_by_id(id)
            .filter(Column::Kind.eq(kind.as_str()))
            .one(&*self.db)
            .await
            .map_err(db_error)?
            .ok_or(ContentStoreError::NotFound)?;

        let mut active: ContentActiveModel = existing.into();
        active.payload = Set(payload);

        let updated = active.update(&*self.db).await.map_err(db_error)?;

        Ok(updated.to_document())
    }

    async fn delete(&self, kind: ContentKind, id: Uuid) -> Result<bool, ContentStoreError> {
        let result = ContentRecords::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::Kind.eq(kind.as_str()))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected > 0)
    }

    async fn clear(&self, kind: ContentKind) -> Result<u64, ContentStoreError> {
        let result = ContentRecords::delete_many()
            .filter(Column::Kind.eq(kind.as_str()))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected)
    }

    async fn ping(&self) -> Result<(), ContentStoreError> {
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1",
            ))
            .await
            .map(|_| ())
            .map_err(db_error)
    }
}
