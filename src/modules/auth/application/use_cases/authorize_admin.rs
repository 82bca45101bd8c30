use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, warn};

use crate::auth::application::domain::entities::{has_admin_role, AdminSession};
use crate::auth::application::ports::outgoing::{TokenProvider, TokenRepository};
use crate::auth::application::{
    ports::outgoing::AccountQuery, services::token_hasher::hash_token,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthorizeError {
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Token has been revoked")]
    TokenRevoked,

    #[error("Account does not have admin privileges")]
    InsufficientPrivilege,

    #[error("Session store unavailable: {0}")]
    StoreError(String),
}

/// Re-checks a bearer token on every admin request.
#[async_trait]
pub trait IAuthorizeAdminUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<AdminSession, AuthorizeError>;
}

#[derive(Clone)]
pub struct AuthorizeAdminUseCase {
    accounts: Arc<dyn AccountQuery>,
    token_provider: Arc<dyn TokenProvider>,
    token_repository: Arc<dyn TokenRepository>,
}

impl AuthorizeAdminUseCase {
    pub fn new(
        accounts: Arc<dyn AccountQuery>,
        token_provider: Arc<dyn TokenProvider>,
        token_repository: Arc<dyn TokenRepository>,
    ) -> Self {
        Self {
            accounts,
            token_provider,
            token_repository,
        }
    }
}

#[async_trait]
impl IAuthorizeAdminUseCase for AuthorizeAdminUseCase {
    async fn execute(&self, token: &str) -> Result<AdminSession, AuthorizeError> {
        let claims = self.token_provider.verify_token(token).map_err(|e| {
            warn!("Rejected bearer token: {}", e);
            AuthorizeError::InvalidToken
        })?;

        let token_hash = hash_token(token);
        let revoked = self
            .token_repository
            .is_token_blacklisted(&token_hash)
            .await
            .map_err(|e| {
                error!("Revocation lookup failed: {}", e);
                AuthorizeError::StoreError(e.to_string())
            })?;

        if revoked {
            warn!(account_id = %claims.sub, "Revoked token presented");
            return Err(AuthorizeError::TokenRevoked);
        }

        let roles = self
            .accounts
            .roles_for(claims.sub)
            .await
            .map_err(|e| AuthorizeError::StoreError(e.to_string()))?;

        if !has_admin_role(&roles) {
            warn!(account_id = %claims.sub, "Admin role withdrawn; revoking session");
            // The request is denied whether or not the revocation sticks
            if let Err(e) = self
                .token_repository
                .blacklist_token(token_hash, claims.sub, claims.expires_at())
                .await
            {
                warn!("Failed to revoke session: {}", e);
            }
            return Err(AuthorizeError::InsufficientPrivilege);
        }

        Ok(AdminSession {
            account_id: claims.sub,
            username: claims.username.clone(),
            roles,
            expires_at: claims.expires_at(),
        })
    }
}
