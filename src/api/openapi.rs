use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, LogoutResponse, SessionResponse,
};
use crate::content::adapter::incoming::web::routes::admin::DeletedCount;
use crate::content::domain::{
    AboutProfile, BlogPost, CategorySkill, ContactMessage, ContactSubmission, GithubRepo, Project,
    ResumeLink, Skill, SkillCategory,
};
use crate::health::{HealthResponse, ReadinessResponse};
use crate::media::adapter::incoming::web::routes::UploadResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "Public portfolio content, contact form and the admin console behind it",
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::login_admin_handler,
        crate::auth::adapter::incoming::web::routes::logout_admin_handler,
        crate::auth::adapter::incoming::web::routes::current_session_handler,

        // Upload endpoints
        crate::media::adapter::incoming::web::routes::upload_media_handler,

        // Public content endpoints
        crate::content::adapter::incoming::web::routes::public::get_about_handler,
        crate::content::adapter::incoming::web::routes::public::get_skills_handler,
        crate::content::adapter::incoming::web::routes::public::get_skill_categories_handler,
        crate::content::adapter::incoming::web::routes::public::get_projects_handler,
        crate::content::adapter::incoming::web::routes::public::get_blog_posts_handler,
        crate::content::adapter::incoming::web::routes::public::get_github_repos_handler,
        crate::content::adapter::incoming::web::routes::public::get_resume_handler,
        crate::content::adapter::incoming::web::routes::contact::submit_contact_handler,

        // Admin content endpoints
        crate::content::adapter::incoming::web::routes::admin_endpoints::about::list,
        crate::content::adapter::incoming::web::routes::admin_endpoints::about::create,
        crate::content::adapter::incoming::web::routes::admin_endpoints::about::upsert,
        crate::content::adapter::incoming::web::routes::admin_endpoints::about::update,
        crate::content::adapter::incoming::web::routes::admin_endpoints::about::delete,
        crate::content::adapter::incoming::web::routes::admin_endpoints::skills::list,
        crate::content::adapter::incoming::web::routes::admin_endpoints::skills::create,
        crate::content::adapter::incoming::web::routes::admin_endpoints::skills::update,
        crate::content::adapter::incoming::web::routes::admin_endpoints::skills::delete,
        crate::content::adapter::incoming::web::routes::skill_categories::delete_skill_category_handler,
        crate::content::adapter::incoming::web::routes::admin_endpoints::projects::list,
        crate::content::adapter::incoming::web::routes::admin_endpoints::projects::create,
        crate::content::adapter::incoming::web::routes::admin_endpoints::projects::update,
        crate::content::adapter::incoming::web::routes::admin_endpoints::projects::delete,
        crate::content::adapter::incoming::web::routes::admin_endpoints::blog::list,
        crate::content::adapter::incoming::web::routes::admin_endpoints::blog::create,
        crate::content::adapter::incoming::web::routes::admin_endpoints::blog::update,
        crate::content::adapter::incoming::web::routes::admin_endpoints::blog::delete,
        crate::content::adapter::incoming::web::routes::admin_endpoints::github::list,
        crate::content::adapter::incoming::web::routes::admin_endpoints::github::create,
        crate::content::adapter::incoming::web::routes::admin_endpoints::github::update,
        crate::content::adapter::incoming::web::routes::admin_endpoints::github::delete,
        crate::content::adapter::incoming::web::routes::admin_endpoints::resume::list,
        crate::content::adapter::incoming::web::routes::admin_endpoints::resume::create,
        crate::content::adapter::incoming::web::routes::admin_endpoints::resume::upsert,
        crate::content::adapter::incoming::web::routes::admin_endpoints::resume::update,
        crate::content::adapter::incoming::web::routes::admin_endpoints::resume::delete,
        crate::content::adapter::incoming::web::routes::admin_endpoints::messages::list,
        crate::content::adapter::incoming::web::routes::admin_endpoints::messages::clear,
        crate::content::adapter::incoming::web::routes::admin_endpoints::messages::delete,

        // Operational
        crate::health::health,
        crate::health::readiness,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            LoginRequestDto,
            LoginResponse,
            LogoutResponse,
            SessionResponse,
            UploadResponse,
            HealthResponse,
            ReadinessResponse,

            AboutProfile,
            Skill,
            SkillCategory,
            CategorySkill,
            Project,
            BlogPost,
            GithubRepo,
            ResumeLink,
            ContactSubmission,
            ContactMessage,
            DeletedCount,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin sign-in and session endpoints"),
        (name = "content", description = "Public portfolio content and the contact form"),
        (name = "admin", description = "Content management; requires an admin session"),
        (name = "uploads", description = "Profile image and resume uploads"),
        (name = "health", description = "Liveness and readiness checks"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_auth_upload_and_health_paths() {
        let doc = ApiDoc::openapi();

        for path in [
            "/api/auth/login",
            "/api/auth/logout",
            "/api/auth/session",
            "/api/admin/uploads/{target}",
            "/health",
            "/ready",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }

        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }

    #[test]
    fn document_covers_every_content_route() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = &doc["paths"];

        for path in [
            "/api/public/about",
            "/api/public/skills",
            "/api/public/skills/categories",
            "/api/public/projects",
            "/api/public/blog",
            "/api/public/github",
            "/api/public/resume",
        ] {
            assert!(paths[path]["get"].is_object(), "missing GET {path}");
        }
        assert!(paths["/api/public/contact"]["post"].is_object());

        for kind in ["about", "skills", "projects", "blog", "github", "resume"] {
            let collection = &paths[format!("/api/admin/{kind}").as_str()];
            let item = &paths[format!("/api/admin/{kind}/{{id}}").as_str()];
            assert_eq!(collection["get"]["operationId"], format!("list_{kind}"));
            assert_eq!(collection["post"]["operationId"], format!("create_{kind}"));
            assert_eq!(item["put"]["operationId"], format!("update_{kind}"));
            assert_eq!(item["delete"]["operationId"], format!("delete_{kind}"));
        }
        for singleton in ["about", "resume"] {
            let collection = &paths[format!("/api/admin/{singleton}").as_str()];
            assert_eq!(collection["put"]["operationId"], format!("put_{singleton}"));
        }

        let messages = &paths["/api/admin/messages"];
        assert!(messages["get"].is_object());
        assert!(messages["delete"].is_object());
        assert!(messages["post"].is_null());
        assert!(paths["/api/admin/messages/{id}"]["delete"].is_object());
        assert!(paths["/api/admin/skills/categories/{category}"]["delete"].is_object());

        let admin_list = &paths["/api/admin/projects"]["get"];
        assert!(admin_list["security"][0]["bearer_auth"].is_array());

        let schemas = &doc["components"]["schemas"];
        for schema in ["AboutProfile", "Skill", "Project", "ContactSubmission", "DeletedCount"] {
            assert!(schemas[schema].is_object(), "missing schema {schema}");
        }
    }
}
