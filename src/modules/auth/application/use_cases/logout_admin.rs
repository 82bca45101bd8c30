use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};

use crate::auth::application::ports::outgoing::{
    TokenProvider, TokenRepository, TokenRepositoryError,
};
use crate::auth::application::services::token_hasher::hash_token;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LogoutError {
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Token revocation failed: {0}")]
    RevocationFailed(String),
}

impl From<TokenRepositoryError> for LogoutError {
    fn from(error: TokenRepositoryError) -> Self {
        LogoutError::RevocationFailed(error.to_string())
    }
}

// ============================ Logout Use Case =============================
#[async_trait]
pub trait ILogoutAdminUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<(), LogoutError>;
}

#[derive(Clone)]
pub struct LogoutAdminUseCase {
    token_provider: Arc<dyn TokenProvider>,
    token_repository: Arc<dyn TokenRepository>,
}

impl LogoutAdminUseCase {
    pub fn new(
        token_provider: Arc<dyn TokenProvider>,
        token_repository: Arc<dyn TokenRepository>,
    ) -> Self {
        Self {
            token_provider,
            token_repository,
        }
    }
}

#[async_trait]
impl ILogoutAdminUseCase for LogoutAdminUseCase {
    async fn execute(&self, token: &str) -> Result<(), LogoutError> {
        let claims = self
            .token_provider
            .verify_token(token)
            .map_err(|_| LogoutError::InvalidToken)?;

        let expires_at = claims.expires_at();
        // Still inside the validation leeway; it dies on its own
        if expires_at <= Utc::now() {
            debug!(account_id = %claims.sub, "Logout with an already expired token");
            return Ok(());
        }

        // Hash the token before storing (never store raw tokens)
        self.token_repository
            .blacklist_token(hash_token(token), claims.sub, expires_at)
            .await?;

        info!(account_id = %claims.sub, "Admin session revoked");
        Ok(())
    }
}
