use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TokenRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid token")]
    InvalidToken,
}

/// Revoked session tokens, keyed by token hash. Entries live until the
/// token would have expired anyway.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    async fn blacklist_token(
        &self,
        token_hash: String,
        account_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRepositoryError>;

    async fn is_token_blacklisted(&self, token_hash: &str) -> Result<bool, TokenRepositoryError>;
}
