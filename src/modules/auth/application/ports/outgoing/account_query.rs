use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::AdminAccount;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AccountStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Account already exists")]
    AlreadyExists,
}

/// Read side of the credential store.
#[async_trait]
pub trait AccountQuery: Send + Sync {
    async fn find_by_username(&self, username: &str)
        -> Result<Option<AdminAccount>, AccountStoreError>;

    /// Roles currently held by the account. Unknown accounts hold none.
    async fn roles_for(&self, account_id: Uuid) -> Result<Vec<String>, AccountStoreError>;
}
