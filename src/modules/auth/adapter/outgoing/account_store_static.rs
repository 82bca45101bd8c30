use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AdminAccount, ADMIN_ROLE};
use crate::auth::application::ports::outgoing::{AccountQuery, AccountStoreError};

/// Single configured admin identity, for deployments without a database.
///
/// The password hash is computed once at startup; the plaintext never lives
/// past configuration loading.
#[derive(Debug, Clone)]
pub struct StaticAccountStore {
    account: AdminAccount,
}

impl StaticAccountStore {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            account: AdminAccount {
                id: Uuid::from_u128(1),
                username: username.into(),
                password_hash: password_hash.into(),
            },
        }
    }
}

#[async_trait]
impl AccountQuery for StaticAccountStore {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminAccount>, AccountStoreError> {
        if username == self.account.username {
            Ok(Some(self.account.clone()))
        } else {
            Ok(None)
        }
    }

    async fn roles_for(&self, account_id: Uuid) -> Result<Vec<String>, AccountStoreError> {
        if account_id == self.account.id {
            Ok(vec![ADMIN_ROLE.to_string()])
        } else {
            Ok(Vec::new())
        }
    }
}
