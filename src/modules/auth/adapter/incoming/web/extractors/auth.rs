use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use tracing::error;

use crate::auth::application::domain::entities::AdminSession;
use crate::auth::application::use_cases::authorize_admin::AuthorizeError;
use crate::{shared::api::ApiResponse, AppState};

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn missing_header() -> ActixError {
    create_api_error(ApiResponse::unauthorized(
        "MISSING_AUTH_HEADER",
        "Missing or invalid authorization header",
    ))
}

/// Raw bearer token, not yet checked.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl FromRequest for BearerToken {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_token_from_header(req).map(BearerToken).ok_or_else(missing_header))
    }
}

/// A caller that passed the admin gate on this request.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub session: AdminSession,
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = extract_token_from_header(req);

        Box::pin(async move {
            let state = state.ok_or_else(|| {
                error!("AppState missing from request");
                create_api_error(ApiResponse::internal_error())
            })?;
            let token = token.ok_or_else(missing_header)?;

            match state.authorize_admin.execute(&token).await {
                Ok(session) => Ok(AdminUser { session }),
                Err(AuthorizeError::InvalidToken) => Err(create_api_error(
                    ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token"),
                )),
                Err(AuthorizeError::TokenRevoked) => Err(create_api_error(
                    ApiResponse::unauthorized("TOKEN_REVOKED", "Session has been revoked"),
                )),
                Err(AuthorizeError::InsufficientPrivilege) => {
                    Err(create_api_error(ApiResponse::forbidden(
                        "INSUFFICIENT_PRIVILEGE",
                        "Admin privileges required",
                    )))
                }
                Err(AuthorizeError::StoreError(e)) => {
                    error!(error = %e, "Authorization check failed");
                    Err(create_api_error(ApiResponse::service_unavailable(
                        "Session store unavailable",
                    )))
                }
            }
        })
    }
}
