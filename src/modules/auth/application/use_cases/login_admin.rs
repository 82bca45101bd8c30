use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use crate::auth::application::domain::entities::{AdminSession, SessionState};
use crate::auth::application::ports::outgoing::{AccountQuery, PasswordHasher, TokenProvider};

// ========================= Login Request =========================
/// Validated login request.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginRequestError {
    EmptyUsername,
    EmptyPassword,
}

impl std::fmt::Display for LoginRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginRequestError::EmptyUsername => write!(f, "Username cannot be empty"),
            LoginRequestError::EmptyPassword => write!(f, "Password cannot be empty"),
        }
    }
}

impl std::error::Error for LoginRequestError {}

impl LoginRequest {
    /// The username is trimmed; the password is taken as typed.
    pub fn new(username: String, password: String) -> Result<Self, LoginRequestError> {
        let username = username.trim().to_string();
        if username.is_empty() {
            return Err(LoginRequestError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, PartialEq)]
pub enum LoginError {
    InvalidCredentials,
    InsufficientPrivilege,
    PasswordVerificationFailed(String),
    TokenGenerationFailed(String),
    QueryError(String),
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::InvalidCredentials => write!(f, "Invalid username or password"),
            LoginError::InsufficientPrivilege => {
                write!(f, "Account does not have admin privileges")
            }
            LoginError::PasswordVerificationFailed(msg) => {
                write!(f, "Password verification failed: {}", msg)
            }
            LoginError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            LoginError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for LoginError {}

// ============================ Login Response =================================
#[derive(Debug, Clone, Serialize)]
pub struct LoginAdminResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
    pub session: AdminSession,
}

// ============================ Login Admin Use Case =============================
#[async_trait]
pub trait ILoginAdminUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginAdminResponse, LoginError>;
}

#[derive(Clone)]
pub struct LoginAdminUseCase {
    accounts: Arc<dyn AccountQuery>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl LoginAdminUseCase {
    pub fn new(
        accounts: Arc<dyn AccountQuery>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            accounts,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl ILoginAdminUseCase for LoginAdminUseCase {
    async fn execute(&self, request: LoginRequest) -> Result<LoginAdminResponse, LoginError> {
        let account = self
            .accounts
            .find_by_username(request.username())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let credentials_valid = self
            .password_hasher
            .verify_password(request.password(), &account.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !credentials_valid {
            return Err(LoginError::InvalidCredentials);
        }

        let roles = self
            .accounts
            .roles_for(account.id)
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?;

        match SessionState::resolve(credentials_valid, &roles) {
            SessionState::AuthenticatedAdmin => {}
            SessionState::AuthenticatedNonAdmin => {
                warn!(account_id = %account.id, "Login refused: admin role missing");
                return Err(LoginError::InsufficientPrivilege);
            }
            _ => return Err(LoginError::InvalidCredentials),
        }

        let issued = self
            .token_provider
            .generate_access_token(account.id, &account.username, &roles)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginAdminResponse {
            access_token: issued.token,
            token_type: "Bearer".to_string(),
            expires_at: issued.expires_at,
            session: AdminSession {
                account_id: account.id,
                username: account.username,
                roles,
                expires_at: issued.expires_at,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use crate::auth::application::domain::entities::{AdminAccount, ADMIN_ROLE};
    use crate::auth::application::ports::outgoing::{AccountStoreError, HashError};
    use uuid::Uuid;

    // ==================== LoginRequest Tests ====================
    #[test]
    fn test_login_request_trims_username() {
        let request = LoginRequest::new("  admin ".to_string(), " pw ".to_string()).unwrap();

        assert_eq!(request.username(), "admin");
        assert_eq!(request.password(), " pw ");
    }

    #[test]
    fn test_login_request_empty_fields() {
        assert_eq!(
            LoginRequest::new("   ".to_string(), "pw".to_string()).unwrap_err(),
            LoginRequestError::EmptyUsername
        );
        assert_eq!(
            LoginRequest::new("admin".to_string(), String::new()).unwrap_err(),
            LoginRequestError::EmptyPassword
        );
    }

    #[test]
    fn test_login_error_display() {
        assert_eq!(
            LoginError::InvalidCredentials.to_string(),
            "Invalid username or password"
        );
        assert_eq!(
            LoginError::InsufficientPrivilege.to_string(),
            "Account does not have admin privileges"
        );
    }

    // ==================== LoginAdminUseCase Tests ====================

    struct MockAccountQuery {
        account: Option<AdminAccount>,
        roles: Vec<String>,
        should_fail: bool,
    }

    impl MockAccountQuery {
        fn with_roles(roles: &[&str]) -> Self {
            Self {
                account: Some(AdminAccount {
                    id: Uuid::new_v4(),
                    username: "admin".to_string(),
                    password_hash: "hashed_password".to_string(),
                }),
                roles: roles.iter().map(|r| r.to_string()).collect(),
                should_fail: false,
            }
        }
    }

    #[async_trait]
    impl AccountQuery for MockAccountQuery {
        async fn find_by_username(
            &self,
            username: &str,
        ) -> Result<Option<AdminAccount>, AccountStoreError> {
            if self.should_fail {
                return Err(AccountStoreError::DatabaseError("Database error".to_string()));
            }
            Ok(self.account.clone().filter(|a| a.username == username))
        }

        async fn roles_for(&self, _account_id: Uuid) -> Result<Vec<String>, AccountStoreError> {
            Ok(self.roles.clone())
        }
    }

    struct MockPasswordHasher {
        should_verify: bool,
    }

    #[async_trait]
    impl PasswordHasher for MockPasswordHasher {
        async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
            Ok("hashed_password".to_string())
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            Ok(self.should_verify)
        }
    }

    fn create_jwt_service() -> Arc<JwtTokenService> {
        Arc::new(JwtTokenService::new(JwtConfig {
            secret_key: "test_secret_key_min_32_characters_long".to_string(),
            issuer: "testapp".to_string(),
            access_token_expiry: 3600,
        }))
    }

    fn use_case(query: MockAccountQuery, should_verify: bool) -> LoginAdminUseCase {
        LoginAdminUseCase::new(
            Arc::new(query),
            Arc::new(MockPasswordHasher { should_verify }),
            create_jwt_service(),
        )
    }

    fn request() -> LoginRequest {
        LoginRequest::new("admin".to_string(), "password123".to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_login_success_issues_admin_session() {
        let jwt = create_jwt_service();
        let use_case = LoginAdminUseCase::new(
            Arc::new(MockAccountQuery::with_roles(&[ADMIN_ROLE])),
            Arc::new(MockPasswordHasher { should_verify: true }),
            jwt.clone(),
        );

        let response = use_case.execute(request()).await.unwrap();

        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.session.username, "admin");
        assert_eq!(response.session.roles, vec![ADMIN_ROLE]);
        assert_eq!(response.expires_at, response.session.expires_at);

        let claims = jwt.verify_token(&response.access_token).unwrap();
        assert_eq!(claims.sub, response.session.account_id);
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let mut query = MockAccountQuery::with_roles(&[ADMIN_ROLE]);
        query.account = None;

        let result = use_case(query, true).execute(request()).await;

        assert_eq!(result.unwrap_err(), LoginError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let result = use_case(MockAccountQuery::with_roles(&[ADMIN_ROLE]), false)
            .execute(request())
            .await;

        assert_eq!(result.unwrap_err(), LoginError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_login_without_admin_role_is_refused() {
        let result = use_case(MockAccountQuery::with_roles(&["editor"]), true)
            .execute(request())
            .await;

        assert_eq!(result.unwrap_err(), LoginError::InsufficientPrivilege);
    }

    #[tokio::test]
    async fn test_login_query_error() {
        let mut query = MockAccountQuery::with_roles(&[ADMIN_ROLE]);
        query.should_fail = true;

        let result = use_case(query, true).execute(request()).await;

        assert!(matches!(result, Err(LoginError::QueryError(_))));
    }
}
