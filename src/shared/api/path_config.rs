use crate::shared::api::ApiResponse;
use actix_web::web::PathConfig;

/// Malformed path segments (e.g. a non-UUID id) become `400 VALIDATION_ERROR`
/// instead of actix's plain-text 404.
pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}
