use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::application::domain::entities::AdminSession;
use crate::shared::api::ApiResponse;
use actix_web::{get, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct SessionResponse {
    account_id: Uuid,
    #[schema(example = "admin")]
    username: String,
    #[schema(example = json!(["admin"]))]
    roles: Vec<String>,
    expires_at: DateTime<Utc>,
}

impl From<AdminSession> for SessionResponse {
    fn from(session: AdminSession) -> Self {
        Self {
            account_id: session.account_id,
            username: session.username,
            roles: session.roles,
            expires_at: session.expires_at,
        }
    }
}

/// Current admin session
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Session is valid", body = inline(SuccessResponse<SessionResponse>)),
        (status = 401, description = "Missing, invalid or revoked token", body = ErrorResponse),
        (status = 403, description = "Account is no longer an admin", body = ErrorResponse),
    )
)]
#[get("/api/auth/session")]
pub async fn current_session_handler(admin: AdminUser) -> impl Responder {
    ApiResponse::success(SessionResponse::from(admin.session))
}
