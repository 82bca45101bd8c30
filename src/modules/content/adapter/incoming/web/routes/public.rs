use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::content::domain::{
    group_by_category, AboutProfile, BlogPost, GithubRepo, Project, ResumeLink, Skill,
    SkillCategory,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

// Public reads never fail: the repositories fall back to built-in content.

#[utoipa::path(
    get,
    path = "/api/public/about",
    tag = "content",
    responses((status = 200, description = "The profile, or `null` data before one is saved", body = inline(SuccessResponse<AboutProfile>)))
)]
#[get("/api/public/about")]
pub async fn get_about_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.content.about.list().await.into_iter().next())
}

#[utoipa::path(
    get,
    path = "/api/public/skills",
    tag = "content",
    responses((status = 200, description = "Skills, newest first", body = inline(SuccessResponse<Vec<Skill>>)))
)]
#[get("/api/public/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.content.skills.list().await)
}

#[utoipa::path(
    get,
    path = "/api/public/skills/categories",
    tag = "content",
    responses((status = 200, description = "Skills grouped by category", body = inline(SuccessResponse<Vec<SkillCategory>>)))
)]
#[get("/api/public/skills/categories")]
pub async fn get_skill_categories_handler(data: web::Data<AppState>) -> impl Responder {
    let skills = data.content.skills.list().await;
    ApiResponse::success(group_by_category(&skills))
}

#[utoipa::path(
    get,
    path = "/api/public/projects",
    tag = "content",
    responses((status = 200, description = "Projects, newest first", body = inline(SuccessResponse<Vec<Project>>)))
)]
#[get("/api/public/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.content.projects.list().await)
}

#[utoipa::path(
    get,
    path = "/api/public/blog",
    tag = "content",
    responses((status = 200, description = "Blog posts, newest first", body = inline(SuccessResponse<Vec<BlogPost>>)))
)]
#[get("/api/public/blog")]
pub async fn get_blog_posts_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.content.blog_posts.list().await)
}

#[utoipa::path(
    get,
    path = "/api/public/github",
    tag = "content",
    responses((status = 200, description = "Featured repositories", body = inline(SuccessResponse<Vec<GithubRepo>>)))
)]
#[get("/api/public/github")]
pub async fn get_github_repos_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.content.github_repos.list().await)
}

/// `data` is `null` until a resume has been set.
#[utoipa::path(
    get,
    path = "/api/public/resume",
    tag = "content",
    responses((status = 200, description = "The resume link, or `null` data before one is set", body = inline(SuccessResponse<ResumeLink>)))
)]
#[get("/api/public/resume")]
pub async fn get_resume_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.content.resume.list().await.into_iter().next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::adapter::outgoing::LocalContentStore;
    use crate::content::application::ports::outgoing::ContentStore;
    use crate::content::domain::{ContentKind, ResumeLink};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::DownStore;
    use actix_web::{test, App};
    use serde_json::Value;
    use std::sync::Arc;

    async fn get_json(app_state: web::Data<AppState>, uri: &str) -> (u16, Value) {
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .configure(crate::content::adapter::incoming::web::configure),
        )
        .await;
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn empty_store_serves_defaults() {
        for uri in [
            "/api/public/skills",
            "/api/public/projects",
            "/api/public/blog",
            "/api/public/github",
        ] {
            let (status, body) = get_json(TestAppStateBuilder::default().build(), uri).await;

            assert_eq!(status, 200, "{uri}");
            assert_eq!(body["success"], true);
            assert!(!body["data"].as_array().unwrap().is_empty(), "{uri}");
        }

        let (_, about) = get_json(TestAppStateBuilder::default().build(), "/api/public/about").await;
        assert!(about["data"]["name"].is_string());
    }

    #[actix_web::test]
    async fn unreachable_store_still_serves_defaults() {
        let state = TestAppStateBuilder::default()
            .with_content_store(Arc::new(DownStore))
            .build();

        let (status, body) = get_json(state, "/api/public/projects").await;

        assert_eq!(status, 200);
        assert!(!body["data"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn resume_is_null_until_set() {
        let (status, body) = get_json(TestAppStateBuilder::default().build(), "/api/public/resume").await;
        assert_eq!(status, 200);
        assert!(body["data"].is_null());

        let store = Arc::new(LocalContentStore::in_memory());
        store
            .insert(
                ContentKind::ResumeLink,
                serde_json::to_value(ResumeLink { url: "https://cdn.example.com/cv.pdf".into() }).unwrap(),
            )
            .await
            .unwrap();
        let state = TestAppStateBuilder::default().with_content_store(store).build();

        let (_, body) = get_json(state, "/api/public/resume").await;
        assert_eq!(body["data"]["url"], "https://cdn.example.com/cv.pdf");
    }

    #[actix_web::test]
    async fn skill_categories_are_grouped() {
        let (status, body) =
            get_json(TestAppStateBuilder::default().build(), "/api/public/skills/categories").await;

        assert_eq!(status, 200);
        let groups = body["data"].as_array().unwrap();
        assert!(!groups.is_empty());
        assert!(groups[0]["title"].is_string());
        assert!(groups[0]["skills"][0]["level"].is_number());
    }
}
