use actix_web::{http::header::CONTENT_TYPE, post, web, HttpRequest, Responder};
use futures::StreamExt;
use serde::Serialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::media::application::domain::UploadTarget;
use crate::media::application::ports::incoming::use_cases::{UploadError, UploadedMedia};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    /// Link or `data:` URL to store in the profile image or resume field.
    #[schema(example = "data:application/pdf;base64,JVBERi0xLjQK")]
    pub reference: String,
    #[schema(example = "application/pdf")]
    pub content_type: String,
    #[schema(example = 48213)]
    pub size_bytes: u64,
}

impl From<UploadedMedia> for UploadResponse {
    fn from(media: UploadedMedia) -> Self {
        Self {
            reference: media.reference,
            content_type: media.content_type,
            size_bytes: media.size_bytes,
        }
    }
}

/// Media type without parameters, lowercased.
fn declared_content_type(req: &HttpRequest) -> Option<String> {
    let raw = req.headers().get(CONTENT_TYPE)?.to_str().ok()?;
    let essence = raw.split(';').next()?.trim().to_ascii_lowercase();
    (!essence.is_empty()).then_some(essence)
}

fn too_large(limit_bytes: u64) -> actix_web::HttpResponse {
    ApiResponse::payload_too_large(
        "FILE_TOO_LARGE",
        &format!("File exceeds the {limit_bytes} byte limit"),
    )
}

/// Upload a profile image or resume
///
/// The raw file is the request body; `Content-Type` names its media type.
#[utoipa::path(
    post,
    path = "/api/admin/uploads/{target}",
    tag = "uploads",
    security(("bearer_auth" = [])),
    params(("target" = String, Path, description = "`profile-image` or `resume`")),
    request_body(content = Vec<u8>, description = "File bytes", content_type = "application/octet-stream"),
    responses(
        (status = 201, description = "File stored", body = inline(SuccessResponse<UploadResponse>)),
        (status = 400, description = "Unknown target or empty file", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 415, description = "Media type not accepted for this target", body = ErrorResponse),
    )
)]
#[post("/api/admin/uploads/{target}")]
pub async fn upload_media_handler(
    admin: AdminUser,
    req: HttpRequest,
    target: web::Path<String>,
    mut payload: web::Payload,
    data: web::Data<AppState>,
) -> impl Responder {
    let target: UploadTarget = match target.into_inner().parse() {
        Ok(target) => target,
        Err(message) => return ApiResponse::bad_request("VALIDATION_ERROR", &message),
    };

    let Some(content_type) = declared_content_type(&req) else {
        return ApiResponse::unsupported_media_type(
            "UNSUPPORTED_MEDIA_TYPE",
            "Content-Type header is required",
        );
    };

    let limit_bytes = data.upload_media.max_bytes(target);
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => {
                warn!(error = %e, "Upload body could not be read");
                return ApiResponse::bad_request("VALIDATION_ERROR", "Upload body could not be read");
            }
        };
        if (body.len() + chunk.len()) as u64 > limit_bytes {
            return too_large(limit_bytes);
        }
        body.extend_from_slice(&chunk);
    }

    match data
        .upload_media
        .execute(target, &content_type, &body)
        .await
    {
        Ok(media) => {
            info!(
                admin = %admin.session.username,
                target = %target,
                size_bytes = media.size_bytes,
                "Media uploaded"
            );
            ApiResponse::created(UploadResponse::from(media))
        }
        Err(UploadError::Empty) => ApiResponse::bad_request("VALIDATION_ERROR", "Uploaded file is empty"),
        Err(UploadError::TooLarge { limit_bytes }) => too_large(limit_bytes),
        Err(e @ (UploadError::UnsupportedType(_) | UploadError::ContentMismatch(_))) => {
            ApiResponse::unsupported_media_type("UNSUPPORTED_MEDIA_TYPE", &e.to_string())
        }
        Err(UploadError::Storage(e)) => {
            error!(error = %e, "Upload storage failed");
            ApiResponse::service_unavailable("Media storage unavailable")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::application::domain::UploadLimits;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::admin_auth;
    use actix_web::{test, App};

    const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 13];

    async fn upload(
        state: web::Data<AppState>,
        target: &str,
        content_type: Option<&str>,
        body: &'static [u8],
    ) -> (u16, serde_json::Value) {
        let app = test::init_service(App::new().app_data(state).service(upload_media_handler)).await;
        let mut req = test::TestRequest::post()
            .uri(&format!("/api/admin/uploads/{target}"))
            .insert_header(admin_auth())
            .set_payload(body);
        if let Some(ct) = content_type {
            req = req.insert_header(("Content-Type", ct));
        }
        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn stores_profile_image() {
        let (status, body) = upload(
            TestAppStateBuilder::default().build(),
            "profile-image",
            Some("image/png"),
            PNG,
        )
        .await;

        assert_eq!(status, 201);
        assert_eq!(body["data"]["content_type"], "image/png");
        assert_eq!(body["data"]["size_bytes"], PNG.len());
        assert!(body["data"]["reference"]
            .as_str()
            .unwrap()
            .starts_with("data:image/png;base64,"));
    }

    #[actix_web::test]
    async fn content_type_parameters_are_ignored() {
        let (status, _) = upload(
            TestAppStateBuilder::default().build(),
            "resume",
            Some("Application/PDF; name=cv.pdf"),
            b"%PDF-1.7\n",
        )
        .await;

        assert_eq!(status, 201);
    }

    #[actix_web::test]
    async fn rejects_unknown_target() {
        let (status, body) = upload(
            TestAppStateBuilder::default().build(),
            "avatar",
            Some("image/png"),
            PNG,
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn rejects_wrong_media_type() {
        let (status, body) = upload(
            TestAppStateBuilder::default().build(),
            "resume",
            Some("image/png"),
            PNG,
        )
        .await;

        assert_eq!(status, 415);
        assert_eq!(body["error"]["code"], "UNSUPPORTED_MEDIA_TYPE");
    }

    #[actix_web::test]
    async fn rejects_missing_content_type() {
        let (status, _) = upload(TestAppStateBuilder::default().build(), "resume", None, b"%PDF-1.7").await;

        assert_eq!(status, 415);
    }

    #[actix_web::test]
    async fn rejects_oversized_body() {
        let state = TestAppStateBuilder::default()
            .with_upload_limits(UploadLimits {
                max_image_bytes: 8,
                max_resume_bytes: 8,
            })
            .build();

        let (status, body) = upload(state, "profile-image", Some("image/png"), PNG).await;

        assert_eq!(status, 413);
        assert_eq!(body["error"]["code"], "FILE_TOO_LARGE");
    }

    #[actix_web::test]
    async fn rejects_empty_body() {
        let (status, body) = upload(
            TestAppStateBuilder::default().build(),
            "profile-image",
            Some("image/png"),
            b"",
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn requires_admin() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(upload_media_handler),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/admin/uploads/resume")
            .insert_header(("Content-Type", "application/pdf"))
            .set_payload(&b"%PDF-1.7"[..])
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 401);
    }
}
