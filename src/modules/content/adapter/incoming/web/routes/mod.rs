pub mod admin;
pub mod admin_endpoints;
pub mod contact;
pub mod public;
pub mod skill_categories;

use actix_web::HttpResponse;
use tracing::error;

use crate::content::application::ports::incoming::use_cases::ContentError;
use crate::shared::api::ApiResponse;

/// Maps a repository failure onto the admin error envelope.
pub(crate) fn content_error_response(err: ContentError) -> HttpResponse {
    match err {
        ContentError::Validation(e) => ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
        ContentError::NotFound(kind) => {
            ApiResponse::not_found("NOT_FOUND", &format!("{kind} record not found"))
        }
        ContentError::SingletonExists(kind) => ApiResponse::conflict(
            "SINGLETON_EXISTS",
            &format!("{kind} already exists; update it instead"),
        ),
        ContentError::StoreUnavailable(e) => {
            error!(error = %e, "Admin request failed: content store unavailable");
            ApiResponse::service_unavailable("Content store unavailable")
        }
    }
}
