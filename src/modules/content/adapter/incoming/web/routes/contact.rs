use actix_web::{post, web, Responder};
use tracing::{error, warn};

use crate::content::application::ports::incoming::use_cases::SubmitContactError;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::content::domain::{ContactMessage, ContactSubmission};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Visitor contact form. No session required.
#[utoipa::path(
    post,
    path = "/api/public/contact",
    tag = "content",
    request_body = ContactSubmission,
    responses(
        (status = 201, description = "Message stored", body = inline(SuccessResponse<ContactMessage>)),
        (
            status = 400,
            description = "Missing field, invalid email or markup",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "VALIDATION_ERROR", "message": "email is not a valid email address" }
            })
        ),
        (status = 503, description = "Message could not be stored", body = ErrorResponse),
    )
)]
#[post("/api/public/contact")]
pub async fn submit_contact_handler(
    body: web::Json<ContactSubmission>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.submit_contact.execute(body.into_inner()).await {
        Ok(stored) => ApiResponse::created(stored),
        Err(SubmitContactError::Validation(e)) => {
            warn!(error = %e, "Contact submission rejected");
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        Err(SubmitContactError::StoreUnavailable(e)) => {
            error!(error = %e, "Contact submission could not be stored");
            ApiResponse::service_unavailable("Message could not be delivered, please try again later")
        }
    }
}
