//! Generic admin handlers, instantiated once per content type in
//! `admin_endpoints`.

use actix_web::{web, HttpResponse};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use super::content_error_response;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::content::application::ports::incoming::use_cases::ManageContent;
use crate::content::application::ContentUseCases;
use crate::content::domain::{
    AboutProfile, BlogPost, ContactMessage, ContentRecord, GithubRepo, Project, ResumeLink, Skill,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Picks the repository that owns a content type.
pub trait ContentResource: ContentRecord {
    fn repository(content: &ContentUseCases) -> &Arc<dyn ManageContent<Self>>;
}

macro_rules! content_resource {
    ($record:ty, $field:ident) => {
        impl ContentResource for $record {
            fn repository(content: &ContentUseCases) -> &Arc<dyn ManageContent<Self>> {
                &content.$field
            }
        }
    };
}

content_resource!(AboutProfile, about);
content_resource!(Skill, skills);
content_resource!(Project, projects);
content_resource!(BlogPost, blog_posts);
content_resource!(GithubRepo, github_repos);
content_resource!(ContactMessage, messages);
content_resource!(ResumeLink, resume);

#[derive(Serialize, ToSchema)]
pub struct DeletedCount {
    #[schema(example = 3)]
    pub deleted: u64,
}

pub async fn list_records<T: ContentResource>(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> HttpResponse {
    match T::repository(&data.content).list_stored().await {
        Ok(records) => ApiResponse::success(records),
        Err(e) => content_error_response(e),
    }
}

pub async fn create_record<T: ContentResource>(
    admin: AdminUser,
    data: web::Data<AppState>,
    body: web::Json<T>,
) -> HttpResponse {
    match T::repository(&data.content).create(body.into_inner()).await {
        Ok(stored) => {
            info!(kind = %T::KIND, id = %stored.id, admin = %admin.session.username, "Record created");
            ApiResponse::created(stored)
        }
        Err(e) => content_error_response(e),
    }
}

pub async fn update_record<T: ContentResource>(
    admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<T>,
) -> HttpResponse {
    let id = path.into_inner();
    match T::repository(&data.content).update(id, body.into_inner()).await {
        Ok(stored) => {
            info!(kind = %T::KIND, %id, admin = %admin.session.username, "Record updated");
            ApiResponse::success(stored)
        }
        Err(e) => content_error_response(e),
    }
}

pub async fn delete_record<T: ContentResource>(
    admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let id = path.into_inner();
    match T::repository(&data.content).delete(id).await {
        Ok(()) => {
            info!(kind = %T::KIND, %id, admin = %admin.session.username, "Record deleted");
            ApiResponse::no_content()
        }
        Err(e) => content_error_response(e),
    }
}

pub async fn put_singleton<T: ContentResource>(
    admin: AdminUser,
    data: web::Data<AppState>,
    body: web::Json<T>,
) -> HttpResponse {
    match T::repository(&data.content).put_singleton(body.into_inner()).await {
        Ok(stored) => {
            info!(kind = %T::KIND, id = %stored.id, admin = %admin.session.username, "Singleton saved");
            ApiResponse::success(stored)
        }
        Err(e) => content_error_response(e),
    }
}

pub async fn clear_records<T: ContentResource>(
    admin: AdminUser,
    data: web::Data<AppState>,
) -> HttpResponse {
    match T::repository(&data.content).clear().await {
        Ok(deleted) => {
            info!(kind = %T::KIND, deleted, admin = %admin.session.username, "Collection cleared");
            ApiResponse::success(DeletedCount { deleted })
        }
        Err(e) => content_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{admin_auth, DownStore};
    use crate::AppState;
    use actix_web::{test, web, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data($state)
                    .app_data(crate::shared::api::custom_json_config())
                    .app_data(crate::shared::api::custom_path_config())
                    .configure(crate::content::adapter::incoming::web::configure),
            )
            .await
        };
    }

    fn state() -> web::Data<AppState> {
        TestAppStateBuilder::default().build()
    }

    fn project_json(title: &str) -> Value {
        json!({
            "title": title,
            "description": "A thing I built",
            "tech": ["Rust", " ", "actix"],
            "code_url": "https://github.com/someone/thing",
            "live_url": ""
        })
    }

    #[actix_web::test]
    async fn admin_routes_require_a_session() {
        let app = app!(state());

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/admin/projects").to_request(),
        )
        .await;
        assert_eq!(resp.status(), 401);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/admin/projects")
                .insert_header(("Authorization", "Bearer editor-token"))
                .set_json(project_json("x"))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 403);
    }

    #[actix_web::test]
    async fn create_then_list_then_update_then_delete() {
        let app = app!(state());

        // create
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/admin/projects")
                .insert_header(admin_auth())
                .set_json(project_json("Portfolio"))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 201);
        let created: Value = test::read_body_json(resp).await;
        let id = created["data"]["id"].as_str().unwrap().to_string();
        assert_eq!(created["data"]["tech"], json!(["Rust", "actix"]));

        // list
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/admin/projects")
                .insert_header(admin_auth())
                .to_request(),
        )
        .await;
        let listed: Value = test::read_body_json(resp).await;
        assert_eq!(listed["data"].as_array().unwrap().len(), 1);
        assert_eq!(listed["data"][0]["title"], "Portfolio");

        // update
        let resp = test::call_service(
            &app,
            test::TestRequest::put()
                .uri(&format!("/api/admin/projects/{id}"))
                .insert_header(admin_auth())
                .set_json(project_json("Portfolio v2"))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 200);

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/admin/projects")
                .insert_header(admin_auth())
                .to_request(),
        )
        .await;
        let listed: Value = test::read_body_json(resp).await;
        assert_eq!(listed["data"].as_array().unwrap().len(), 1);
        assert_eq!(listed["data"][0]["title"], "Portfolio v2");

        // delete twice: both succeed
        for _ in 0..2 {
            let resp = test::call_service(
                &app,
                test::TestRequest::delete()
                    .uri(&format!("/api/admin/projects/{id}"))
                    .insert_header(admin_auth())
                    .to_request(),
            )
            .await;
            assert_eq!(resp.status(), 204);
        }
    }

    #[actix_web::test]
    async fn update_of_missing_record_is_not_found() {
        let app = app!(state());

        let resp = test::call_service(
            &app,
            test::TestRequest::put()
                .uri(&format!("/api/admin/projects/{}", uuid::Uuid::new_v4()))
                .insert_header(admin_auth())
                .set_json(project_json("Ghost"))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), 404);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[actix_web::test]
    async fn invalid_record_is_rejected() {
        let app = app!(state());

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/admin/projects")
                .insert_header(admin_auth())
                .set_json(json!({ "title": "<script>x</script>", "description": "d" }))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn malformed_id_is_validation_error() {
        let app = app!(state());

        let resp = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri("/api/admin/projects/not-a-uuid")
                .insert_header(admin_auth())
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn skill_level_is_clamped() {
        let app = app!(state());

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/admin/skills")
                .insert_header(admin_auth())
                .set_json(json!({ "category": "Cloud", "name": "AWS", "level": 140 }))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), 201);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["level"], 100);
    }

    #[actix_web::test]
    async fn singleton_rejects_second_create_but_accepts_put() {
        let app = app!(state());
        let about = json!({ "name": "Ada", "role": "Engineer", "bio": "Builds things" });

        let first = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/admin/about")
                .insert_header(admin_auth())
                .set_json(&about)
                .to_request(),
        )
        .await;
        assert_eq!(first.status(), 201);

        let second = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/admin/about")
                .insert_header(admin_auth())
                .set_json(&about)
                .to_request(),
        )
        .await;
        assert_eq!(second.status(), 409);

        let put = test::call_service(
            &app,
            test::TestRequest::put()
                .uri("/api/admin/about")
                .insert_header(admin_auth())
                .set_json(json!({ "name": "Ada L.", "role": "Engineer", "bio": "Builds things" }))
                .to_request(),
        )
        .await;
        assert_eq!(put.status(), 200);

        let public = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/public/about").to_request(),
        )
        .await;
        let body: Value = test::read_body_json(public).await;
        assert_eq!(body["data"]["name"], "Ada L.");
    }

    #[actix_web::test]
    async fn messages_can_be_listed_and_cleared() {
        let app = app!(state());

        for name in ["Jane", "John"] {
            let resp = test::call_service(
                &app,
                test::TestRequest::post()
                    .uri("/api/public/contact")
                    .set_json(json!({ "name": name, "email": "jane@x.com", "message": "Hello" }))
                    .to_request(),
            )
            .await;
            assert_eq!(resp.status(), 201);
        }

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/admin/messages")
                .insert_header(admin_auth())
                .to_request(),
        )
        .await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"][0]["name"], "John");

        let resp = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri("/api/admin/messages")
                .insert_header(admin_auth())
                .to_request(),
        )
        .await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["deleted"], 2);

        // Messages are never created through the admin API
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/admin/messages")
                .insert_header(admin_auth())
                .set_json(json!({ "name": "x" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 405);
    }

    #[actix_web::test]
    async fn store_outage_surfaces_as_503() {
        let state = TestAppStateBuilder::default()
            .with_content_store(Arc::new(DownStore))
            .build();
        let app = app!(state);

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/admin/projects")
                .insert_header(admin_auth())
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), 503);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "STORE_UNAVAILABLE");
    }
}
