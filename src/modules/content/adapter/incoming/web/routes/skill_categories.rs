use actix_web::{delete, web, Responder};
use tracing::info;

use super::admin::DeletedCount;
use super::content_error_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Deletes every skill filed under a category.
#[utoipa::path(
    delete,
    path = "/api/admin/skills/categories/{category}",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("category" = String, Path, description = "Category title, matched exactly")),
    responses(
        (status = 200, description = "Skills removed", body = inline(SuccessResponse<DeletedCount>)),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 403, description = "Session is not an admin session", body = ErrorResponse),
        (status = 503, description = "Content store unavailable", body = ErrorResponse),
    )
)]
#[delete("/api/admin/skills/categories/{category}")]
pub async fn delete_skill_category_handler(
    admin: AdminUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let category = path.into_inner();
    let skills = &data.content.skills;

    let stored = match skills.list_stored().await {
        Ok(stored) => stored,
        Err(e) => return content_error_response(e),
    };

    let mut deleted = 0u64;
    for skill in stored.iter().filter(|s| s.record.category == category.trim()) {
        if let Err(e) = skills.delete(skill.id).await {
            return content_error_response(e);
        }
        deleted += 1;
    }

    info!(%category, deleted, admin = %admin.session.username, "Skill category deleted");
    ApiResponse::success(DeletedCount { deleted })
}
