use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_repository::{
    TokenRepository, TokenRepositoryError,
};

/// Redis-backed revocation list, shared by every instance behind the same Redis.
///
/// ## Redis data model
///
/// ```text
/// auth:blacklist:token:{token_hash} -> "{account_id}"   (TTL = token expiry)
/// auth:blacklist:account:{account_id} -> SET(token_hash) (TTL = latest expiry)
/// ```
///
/// The per-token key is authoritative; the per-account set is an index.
/// Redis TTL is the only cleanup mechanism.
#[derive(Clone)]
pub struct RedisTokenRepository {
    pool: Arc<Pool>,
}

impl RedisTokenRepository {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn token_key(token_hash: &str) -> String {
        format!("auth:blacklist:token:{token_hash}")
    }

    fn account_key(account_id: Uuid) -> String {
        format!("auth:blacklist:account:{account_id}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, TokenRepositoryError> {
        self.pool
            .get()
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl TokenRepository for RedisTokenRepository {
    /// Runs atomically:
    /// ```text
    /// SET    auth:blacklist:token:{hash} "{account_id}"
    /// EXPIRE auth:blacklist:token:{hash} <ttl>
    /// SADD   auth:blacklist:account:{account_id} {hash}
    /// EXPIRE auth:blacklist:account:{account_id} <ttl>
    /// ```
    async fn blacklist_token(
        &self,
        token_hash: String,
        account_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRepositoryError> {
        let ttl = (expires_at - Utc::now()).num_seconds();
        if ttl <= 0 {
            return Err(TokenRepositoryError::InvalidToken);
        }

        let token_key = Self::token_key(&token_hash);
        let account_key = Self::account_key(account_id);

        let mut conn = self.get_conn().await?;

        deadpool_redis::redis::pipe()
            .atomic()
            .cmd("SET")
            .arg(&token_key)
            .arg(account_id.to_string())
            .ignore()
            .cmd("EXPIRE")
            .arg(&token_key)
            .arg(ttl)
            .ignore()
            .cmd("SADD")
            .arg(&account_key)
            .arg(&token_hash)
            .ignore()
            .cmd("EXPIRE")
            .arg(&account_key)
            .arg(ttl)
            .ignore()
            .query_async::<()>(&mut *conn)
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn is_token_blacklisted(&self, token_hash: &str) -> Result<bool, TokenRepositoryError> {
        let key = Self::token_key(token_hash);
        let mut conn = self.get_conn().await?;

        let exists: bool = conn
            .exists(key)
            .await
            .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))?;

        Ok(exists)
    }
}
