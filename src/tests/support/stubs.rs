use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AdminSession, ADMIN_ROLE};
use crate::auth::application::use_cases::{
    authorize_admin::{AuthorizeError, IAuthorizeAdminUseCase},
    login_admin::{ILoginAdminUseCase, LoginAdminResponse, LoginError, LoginRequest},
    logout_admin::{ILogoutAdminUseCase, LogoutError},
};
use crate::content::application::ports::outgoing::{ContentStore, ContentStoreError, StoredDocument};
use crate::content::domain::ContentKind;

/// Bearer token the stub gate accepts as an admin.
pub const TEST_ADMIN_TOKEN: &str = "test-admin-token";

pub fn admin_auth() -> (&'static str, String) {
    ("Authorization", format!("Bearer {TEST_ADMIN_TOKEN}"))
}

fn admin_session() -> AdminSession {
    AdminSession {
        account_id: Uuid::from_u128(1),
        username: "admin".to_string(),
        roles: vec![ADMIN_ROLE.to_string()],
        expires_at: Utc::now() + Duration::hours(1),
    }
}

// ============================================================
// Auth stubs
// ============================================================

#[derive(Default)]
pub struct StubLoginAdminUseCase;

#[async_trait]
impl ILoginAdminUseCase for StubLoginAdminUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginAdminResponse, LoginError> {
        let session = admin_session();
        Ok(LoginAdminResponse {
            access_token: TEST_ADMIN_TOKEN.to_string(),
            token_type: "Bearer".to_string(),
            expires_at: session.expires_at,
            session,
        })
    }
}

#[derive(Default)]
pub struct StubLogoutAdminUseCase;

#[async_trait]
impl ILogoutAdminUseCase for StubLogoutAdminUseCase {
    async fn execute(&self, _token: &str) -> Result<(), LogoutError> {
        Ok(())
    }
}

/// `TEST_ADMIN_TOKEN` passes, `revoked-token` and `editor-token` fail the
/// way a revoked or non-admin session would, anything else is invalid.
#[derive(Default)]
pub struct StubAuthorizeAdminUseCase;

#[async_trait]
impl IAuthorizeAdminUseCase for StubAuthorizeAdminUseCase {
    async fn execute(&self, token: &str) -> Result<AdminSession, AuthorizeError> {
        match token {
            TEST_ADMIN_TOKEN => Ok(admin_session()),
            "revoked-token" => Err(AuthorizeError::TokenRevoked),
            "editor-token" => Err(AuthorizeError::InsufficientPrivilege),
            _ => Err(AuthorizeError::InvalidToken),
        }
    }
}

// ============================================================
// Content store stubs
// ============================================================

/// A store whose backend is unreachable.
pub struct DownStore;

fn down() -> ContentStoreError {
    ContentStoreError::Unavailable("connection refused".to_string())
}

#[async_trait]
impl ContentStore for DownStore {
    async fn list(&self, _kind: ContentKind) -> Result<Vec<StoredDocument>, ContentStoreError> {
        Err(down())
    }

    async fn insert(
        &self,
        _kind: ContentKind,
        _payload: Value,
    ) -> Result<StoredDocument, ContentStoreError> {
        Err(down())
    }

    async fn update(
        &self,
        _kind: ContentKind,
        _id: Uuid,
        _payload: Value,
    ) -> Result<StoredDocument, ContentStoreError> {
        Err(down())
    }

    async fn delete(&self, _kind: ContentKind, _id: Uuid) -> Result<bool, ContentStoreError> {
        Err(down())
    }

    async fn clear(&self, _kind: ContentKind) -> Result<u64, ContentStoreError> {
        Err(down())
    }

    async fn ping(&self) -> Result<(), ContentStoreError> {
        Err(down())
    }
}
