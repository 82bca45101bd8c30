use async_trait::async_trait;
use uuid::Uuid;

use super::AccountStoreError;
use crate::auth::application::domain::entities::AdminAccount;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn create_account(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<AdminAccount, AccountStoreError>;

    /// Assigning a role the account already holds is not an error.
    async fn assign_role(&self, account_id: Uuid, role: &str) -> Result<(), AccountStoreError>;
}
