use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_repository::{
    TokenRepository, TokenRepositoryError,
};

/// Process-local revocation list for single-instance deployments.
///
/// Entries are dropped lazily once the token they revoke has expired.
#[derive(Debug, Default)]
pub struct MemoryTokenRepository {
    revoked: RwLock<HashMap<String, DateTime<Utc>>>,
}

impl MemoryTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenRepository for MemoryTokenRepository {
    async fn blacklist_token(
        &self,
        token_hash: String,
        _account_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRepositoryError> {
        let now = Utc::now();
        if expires_at <= now {
            return Err(TokenRepositoryError::InvalidToken);
        }

        let mut revoked = self.revoked.write().await;
        revoked.retain(|_, until| *until > now);
        revoked.insert(token_hash, expires_at);
        Ok(())
    }

    async fn is_token_blacklisted(&self, token_hash: &str) -> Result<bool, TokenRepositoryError> {
        Ok(self
            .revoked
            .read()
            .await
            .get(token_hash)
            .is_some_and(|until| *until > Utc::now()))
    }
}
