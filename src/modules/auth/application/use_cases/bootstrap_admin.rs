use std::sync::Arc;

use tracing::info;

use crate::auth::application::domain::entities::{AdminAccount, ADMIN_ROLE};
use crate::auth::application::ports::outgoing::{
    AccountQuery, AccountRepository, AccountStoreError, PasswordHasher,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BootstrapError {
    #[error("Admin username and password must not be empty")]
    EmptyCredentials,

    #[error("Password hashing failed: {0}")]
    HashFailed(String),

    #[error("Account store error: {0}")]
    StoreError(String),
}

impl From<AccountStoreError> for BootstrapError {
    fn from(error: AccountStoreError) -> Self {
        BootstrapError::StoreError(error.to_string())
    }
}

/// Makes sure the configured admin account exists and holds the admin role.
///
/// Runs once at startup in database auth mode. An existing account keeps its
/// current password.
pub struct BootstrapAdminUseCase {
    query: Arc<dyn AccountQuery>,
    repository: Arc<dyn AccountRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl BootstrapAdminUseCase {
    pub fn new(
        query: Arc<dyn AccountQuery>,
        repository: Arc<dyn AccountRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }

    pub async fn execute(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AdminAccount, BootstrapError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(BootstrapError::EmptyCredentials);
        }

        let account = match self.query.find_by_username(username).await? {
            Some(existing) => existing,
            None => {
                let hash = self
                    .password_hasher
                    .hash_password(password)
                    .await
                    .map_err(|e| BootstrapError::HashFailed(e.to_string()))?;

                match self.repository.create_account(username, &hash).await {
                    Ok(created) => {
                        info!(account_id = %created.id, "Admin account created");
                        created
                    }
                    // Another instance won the race
                    Err(AccountStoreError::AlreadyExists) => self
                        .query
                        .find_by_username(username)
                        .await?
                        .ok_or_else(|| {
                            BootstrapError::StoreError("account vanished after creation".into())
                        })?,
                    Err(e) => return Err(e.into()),
                }
            }
        };

        self.repository.assign_role(account.id, ADMIN_ROLE).await?;
        info!(account_id = %account.id, "Admin role ensured");

        Ok(account)
    }
}
