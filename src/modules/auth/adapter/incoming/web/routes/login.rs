use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::routes::SessionResponse;
use crate::auth::application::use_cases::login_admin::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Login request from the admin console
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "admin")]
    pub username: String,

    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// Signed session token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    access_token: String,

    #[schema(example = "Bearer")]
    token_type: String,

    expires_at: DateTime<Utc>,

    session: SessionResponse,
}

/// Admin login
///
/// Checks the credential pair and the admin role, then issues a session token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResponse>)),
        (
            status = 400,
            description = "Missing username or password",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "VALIDATION_ERROR", "message": "Username cannot be empty" }
            })
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_CREDENTIALS", "message": "Invalid username or password" }
            })
        ),
        (
            status = 403,
            description = "Credentials valid but the account is not an admin",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INSUFFICIENT_PRIVILEGE", "message": "Admin privileges required" }
            })
        ),
        (status = 503, description = "Account store unavailable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_admin_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(username = %dto.username, "Login attempt");

    let request = match LoginRequest::new(dto.username, dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.login_admin.execute(request).await {
        Ok(response) => {
            info!(account_id = %response.session.account_id, "Admin logged in");

            ApiResponse::success(LoginResponse {
                access_token: response.access_token,
                token_type: response.token_type,
                expires_at: response.expires_at,
                session: response.session.into(),
            })
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
        }

        Err(LoginError::InsufficientPrivilege) => {
            warn!("Login failed: admin role missing");
            ApiResponse::forbidden("INSUFFICIENT_PRIVILEGE", "Admin privileges required")
        }

        Err(LoginError::QueryError(ref e)) => {
            error!(error = %e, "Account lookup failed");
            ApiResponse::service_unavailable("Account store unavailable")
        }

        Err(LoginError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }
    }
}
