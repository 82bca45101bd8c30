use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Role that unlocks every admin mutation.
pub const ADMIN_ROLE: &str = "admin";

/// A login identity together with its stored password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminAccount {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
}

/// Where a caller stands with the access gate.
///
/// `Authenticating` only exists while a login is being checked, and
/// `AuthenticatedNonAdmin` never yields a session: the caller is sent back to
/// `Anonymous` with an "insufficient privilege" answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticating,
    AuthenticatedNonAdmin,
    AuthenticatedAdmin,
}

impl SessionState {
    /// Outcome of a credential check.
    pub fn resolve(credentials_valid: bool, roles: &[String]) -> Self {
        if !credentials_valid {
            SessionState::Anonymous
        } else if has_admin_role(roles) {
            SessionState::AuthenticatedAdmin
        } else {
            SessionState::AuthenticatedNonAdmin
        }
    }

    pub fn can_mutate(self) -> bool {
        matches!(self, SessionState::AuthenticatedAdmin)
    }
}

pub fn has_admin_role(roles: &[String]) -> bool {
    roles.iter().any(|role| role == ADMIN_ROLE)
}

/// An authenticated admin session, as carried by a bearer token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminSession {
    pub account_id: Uuid,
    pub username: String,
    pub roles: Vec<String>,
    pub expires_at: DateTime<Utc>,
}
