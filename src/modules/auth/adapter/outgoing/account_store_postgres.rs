use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::admin_users::{
    ActiveModel as AdminUserActiveModel, Column as AdminUserColumn, Entity as AdminUserEntity,
    Model as AdminUserModel,
};
use super::sea_orm_entity::user_roles::{
    ActiveModel as UserRoleActiveModel, Column as UserRoleColumn, Entity as UserRoleEntity,
};
use crate::auth::application::domain::entities::AdminAccount;
use crate::auth::application::ports::outgoing::{
    AccountQuery, AccountRepository, AccountStoreError,
};

/// Admin accounts and role assignments kept in Postgres.
///
/// Usernames are stored and looked up trimmed and lowercased.
#[derive(Clone, Debug)]
pub struct PostgresAccountStore {
    db: Arc<DatabaseConnection>,
}

impl PostgresAccountStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn normalize(username: &str) -> String {
        username.trim().to_lowercase()
    }

    fn map_to_account(model: AdminUserModel) -> AdminAccount {
        AdminAccount {
            id: model.id,
            username: model.username,
            password_hash: model.password_hash,
        }
    }

    fn is_unique_violation(err: &DbErr) -> bool {
        let err_str = err.to_string().to_lowercase();
        err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
    }
}

#[async_trait]
impl AccountQuery for PostgresAccountStore {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminAccount>, AccountStoreError> {
        let account = AdminUserEntity::find()
            .filter(AdminUserColumn::Username.eq(Self::normalize(username)))
            .one(&*self.db)
            .await
            .map_err(|e| AccountStoreError::DatabaseError(e.to_string()))?;

        Ok(account.map(Self::map_to_account))
    }

    async fn roles_for(&self, account_id: Uuid) -> Result<Vec<String>, AccountStoreError> {
        let roles = UserRoleEntity::find()
            .filter(UserRoleColumn::UserId.eq(account_id))
            .all(&*self.db)
            .await
            .map_err(|e| AccountStoreError::DatabaseError(e.to_string()))?;

        Ok(roles.into_iter().map(|r| r.role).collect())
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountStore {
    async fn create_account(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<AdminAccount, AccountStoreError> {
        let active_account = AdminUserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(Self::normalize(username)),
            password_hash: Set(password_hash.to_string()),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_account.insert(&*self.db).await.map_err(|e| {
            if Self::is_unique_violation(&e) {
                return AccountStoreError::AlreadyExists;
            }
            AccountStoreError::DatabaseError(e.to_string())
        })?;

        Ok(Self::map_to_account(inserted))
    }

    async fn assign_role(&self, account_id: Uuid, role: &str) -> Result<(), AccountStoreError> {
        let existing = UserRoleEntity::find()
            .filter(UserRoleColumn::UserId.eq(account_id))
            .filter(UserRoleColumn::Role.eq(role))
            .one(&*self.db)
            .await
            .map_err(|e| AccountStoreError::DatabaseError(e.to_string()))?;

        if existing.is_some() {
            return Ok(());
        }

        let active_role = UserRoleActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(account_id),
            role: Set(role.to_string()),
            created_at: NotSet,
        };

        match active_role.insert(&*self.db).await {
            Ok(_) => Ok(()),
            // Lost a race with a concurrent assignment
            Err(e) if Self::is_unique_violation(&e) => Ok(()),
            Err(e) => Err(AccountStoreError::DatabaseError(e.to_string())),
        }
    }
}
