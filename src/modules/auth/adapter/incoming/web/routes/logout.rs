use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::BearerToken;
use crate::auth::application::use_cases::logout_admin::LogoutError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct LogoutResponse {
    #[schema(example = "Logged out successfully")]
    message: String,
}

/// Admin logout
///
/// Revokes the presented session token until it would have expired.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Session revoked", body = inline(SuccessResponse<LogoutResponse>)),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 503, description = "Session store unavailable", body = ErrorResponse),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_admin_handler(
    token: BearerToken,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.logout_admin.execute(&token.0).await {
        Ok(()) => ApiResponse::success(LogoutResponse {
            message: "Logged out successfully".to_string(),
        }),
        Err(LogoutError::InvalidToken) => {
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
        }
        Err(LogoutError::RevocationFailed(ref e)) => {
            error!(error = %e, "Logout could not revoke session");
            ApiResponse::service_unavailable("Session store unavailable")
        }
    }
}
