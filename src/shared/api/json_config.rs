// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::error::JsonPayloadError;
use actix_web::web::JsonConfig;

/// Floor for the JSON body limit. Plain content records stay far below it.
pub const DEFAULT_JSON_LIMIT: usize = 16 * 1024 * 1024;

/// Room for the record fields around an embedded upload.
const JSON_ENVELOPE_BYTES: usize = 64 * 1024;

/// Body limit that still admits a record embedding the largest upload as a
/// base64 `data:` reference (4 output bytes per 3 input bytes).
pub fn json_limit_for_uploads(max_upload_bytes: u64) -> usize {
    let max_upload = usize::try_from(max_upload_bytes).unwrap_or(usize::MAX);
    max_upload
        .div_ceil(3)
        .saturating_mul(4)
        .saturating_add(JSON_ENVELOPE_BYTES)
        .max(DEFAULT_JSON_LIMIT)
}

pub fn custom_json_config() -> JsonConfig {
    json_config_with_limit(DEFAULT_JSON_LIMIT)
}

pub fn json_config_with_limit(limit: usize) -> JsonConfig {
    JsonConfig::default().limit(limit).error_handler(|err, _req| {
        let message = err.to_string();
        let response = match &err {
            JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                ApiResponse::payload_too_large("PAYLOAD_TOO_LARGE", &message)
            }
            _ => ApiResponse::bad_request("VALIDATION_ERROR", &message),
        };
        actix_web::error::InternalError::from_response(err, response).into()
    })
}
