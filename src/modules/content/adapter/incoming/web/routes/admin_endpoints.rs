//! Concrete admin endpoints, one module per content type.
//!
//! Each handler forwards to the generic handler in `admin` for its record type
//! and carries the OpenAPI description for that route. Records come back with
//! `id`, `created_at` and `updated_at` alongside their own fields.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use super::admin::{
    clear_records, create_record, delete_record, list_records, put_singleton, update_record,
    DeletedCount,
};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::content::domain::{
    AboutProfile, BlogPost, ContactMessage, GithubRepo, Project, ResumeLink, Skill,
};
use crate::AppState;

// Path arguments are taken as `tt` so utoipa sees plain string literals.
macro_rules! admin_endpoints {
    ($module:ident, $record:ident, $collection:tt, $item:tt, [$($op:ident),+ $(,)?]) => {
        pub mod $module {
            use super::*;

            $( admin_endpoints!(@$op $module, $record, $collection, $item); )+

            pub fn configure(cfg: &mut web::ServiceConfig) {
                let mut collection = web::resource($collection);
                let mut item = web::resource($item);
                $( admin_endpoints!(@route $op, collection, item); )+
                cfg.service(collection).service(item);
            }
        }
    };

    (@list $module:ident, $record:ident, $collection:tt, $item:tt) => {
        /// List stored records, newest first
        #[utoipa::path(
            get,
            path = $collection,
            tag = "admin",
            operation_id = concat!("list_", stringify!($module)),
            security(("bearer_auth" = [])),
            responses(
                (status = 200, description = "Stored records", body = inline(SuccessResponse<Vec<$record>>)),
                (status = 401, description = "Missing or invalid session", body = ErrorResponse),
                (status = 403, description = "Session is not an admin session", body = ErrorResponse),
                (status = 503, description = "Content store unavailable", body = ErrorResponse),
            )
        )]
        pub async fn list(admin: AdminUser, data: web::Data<AppState>) -> HttpResponse {
            list_records::<$record>(admin, data).await
        }
    };

    (@create $module:ident, $record:ident, $collection:tt, $item:tt) => {
        /// Create a record
        #[utoipa::path(
            post,
            path = $collection,
            tag = "admin",
            operation_id = concat!("create_", stringify!($module)),
            security(("bearer_auth" = [])),
            request_body = $record,
            responses(
                (status = 201, description = "Record created", body = inline(SuccessResponse<$record>)),
                (status = 400, description = "Validation error", body = ErrorResponse),
                (status = 401, description = "Missing or invalid session", body = ErrorResponse),
                (status = 403, description = "Session is not an admin session", body = ErrorResponse),
                (status = 503, description = "Content store unavailable", body = ErrorResponse),
            )
        )]
        pub async fn create(
            admin: AdminUser,
            data: web::Data<AppState>,
            body: web::Json<$record>,
        ) -> HttpResponse {
            create_record::<$record>(admin, data, body).await
        }
    };

    (@create_once $module:ident, $record:ident, $collection:tt, $item:tt) => {
        /// Create the record if none exists yet
        #[utoipa::path(
            post,
            path = $collection,
            tag = "admin",
            operation_id = concat!("create_", stringify!($module)),
            security(("bearer_auth" = [])),
            request_body = $record,
            responses(
                (status = 201, description = "Record created", body = inline(SuccessResponse<$record>)),
                (status = 400, description = "Validation error", body = ErrorResponse),
                (status = 401, description = "Missing or invalid session", body = ErrorResponse),
                (status = 403, description = "Session is not an admin session", body = ErrorResponse),
                (status = 409, description = "A record already exists; use PUT instead", body = ErrorResponse),
                (status = 503, description = "Content store unavailable", body = ErrorResponse),
            )
        )]
        pub async fn create(
            admin: AdminUser,
            data: web::Data<AppState>,
            body: web::Json<$record>,
        ) -> HttpResponse {
            create_record::<$record>(admin, data, body).await
        }
    };

    (@upsert $module:ident, $record:ident, $collection:tt, $item:tt) => {
        /// Create or replace the single record
        #[utoipa::path(
            put,
            path = $collection,
            tag = "admin",
            operation_id = concat!("put_", stringify!($module)),
            security(("bearer_auth" = [])),
            request_body = $record,
            responses(
                (status = 200, description = "Record saved", body = inline(SuccessResponse<$record>)),
                (status = 400, description = "Validation error", body = ErrorResponse),
                (status = 401, description = "Missing or invalid session", body = ErrorResponse),
                (status = 403, description = "Session is not an admin session", body = ErrorResponse),
                (status = 503, description = "Content store unavailable", body = ErrorResponse),
            )
        )]
        pub async fn upsert(
            admin: AdminUser,
            data: web::Data<AppState>,
            body: web::Json<$record>,
        ) -> HttpResponse {
            put_singleton::<$record>(admin, data, body).await
        }
    };

    (@update $module:ident, $record:ident, $collection:tt, $item:tt) => {
        /// Replace a record
        #[utoipa::path(
            put,
            path = $item,
            tag = "admin",
            operation_id = concat!("update_", stringify!($module)),
            security(("bearer_auth" = [])),
            params(("id" = Uuid, Path, description = "Record id")),
            request_body = $record,
            responses(
                (status = 200, description = "Record updated", body = inline(SuccessResponse<$record>)),
                (status = 400, description = "Validation error or malformed id", body = ErrorResponse),
                (status = 401, description = "Missing or invalid session", body = ErrorResponse),
                (status = 403, description = "Session is not an admin session", body = ErrorResponse),
                (status = 404, description = "No record with this id", body = ErrorResponse),
                (status = 503, description = "Content store unavailable", body = ErrorResponse),
            )
        )]
        pub async fn update(
            admin: AdminUser,
            data: web::Data<AppState>,
            path: web::Path<Uuid>,
            body: web::Json<$record>,
        ) -> HttpResponse {
            update_record::<$record>(admin, data, path, body).await
        }
    };

    (@delete $module:ident, $record:ident, $collection:tt, $item:tt) => {
        /// Delete a record. Deleting a missing id also succeeds.
        #[utoipa::path(
            delete,
            path = $item,
            tag = "admin",
            operation_id = concat!("delete_", stringify!($module)),
            security(("bearer_auth" = [])),
            params(("id" = Uuid, Path, description = "Record id")),
            responses(
                (status = 204, description = "Record deleted"),
                (status = 400, description = "Malformed id", body = ErrorResponse),
                (status = 401, description = "Missing or invalid session", body = ErrorResponse),
                (status = 403, description = "Session is not an admin session", body = ErrorResponse),
                (status = 503, description = "Content store unavailable", body = ErrorResponse),
            )
        )]
        pub async fn delete(
            admin: AdminUser,
            data: web::Data<AppState>,
            path: web::Path<Uuid>,
        ) -> HttpResponse {
            delete_record::<$record>(admin, data, path).await
        }
    };

    (@clear $module:ident, $record:ident, $collection:tt, $item:tt) => {
        /// Delete every record in the collection
        #[utoipa::path(
            delete,
            path = $collection,
            tag = "admin",
            operation_id = concat!("clear_", stringify!($module)),
            security(("bearer_auth" = [])),
            responses(
                (status = 200, description = "Collection cleared", body = inline(SuccessResponse<DeletedCount>)),
                (status = 401, description = "Missing or invalid session", body = ErrorResponse),
                (status = 403, description = "Session is not an admin session", body = ErrorResponse),
                (status = 503, description = "Content store unavailable", body = ErrorResponse),
            )
        )]
        pub async fn clear(admin: AdminUser, data: web::Data<AppState>) -> HttpResponse {
            clear_records::<$record>(admin, data).await
        }
    };

    (@route list, $collection:ident, $item:ident) => {
        $collection = $collection.route(web::get().to(list));
    };
    (@route create, $collection:ident, $item:ident) => {
        $collection = $collection.route(web::post().to(create));
    };
    (@route create_once, $collection:ident, $item:ident) => {
        $collection = $collection.route(web::post().to(create));
    };
    (@route upsert, $collection:ident, $item:ident) => {
        $collection = $collection.route(web::put().to(upsert));
    };
    (@route update, $collection:ident, $item:ident) => {
        $item = $item.route(web::put().to(update));
    };
    (@route delete, $collection:ident, $item:ident) => {
        $item = $item.route(web::delete().to(delete));
    };
    (@route clear, $collection:ident, $item:ident) => {
        $collection = $collection.route(web::delete().to(clear));
    };
}

admin_endpoints!(about, AboutProfile, "/api/admin/about", "/api/admin/about/{id}",
    [list, create_once, upsert, update, delete]);
admin_endpoints!(skills, Skill, "/api/admin/skills", "/api/admin/skills/{id}",
    [list, create, update, delete]);
admin_endpoints!(projects, Project, "/api/admin/projects", "/api/admin/projects/{id}",
    [list, create, update, delete]);
admin_endpoints!(blog, BlogPost, "/api/admin/blog", "/api/admin/blog/{id}",
    [list, create, update, delete]);
admin_endpoints!(github, GithubRepo, "/api/admin/github", "/api/admin/github/{id}",
    [list, create, update, delete]);
admin_endpoints!(resume, ResumeLink, "/api/admin/resume", "/api/admin/resume/{id}",
    [list, create_once, upsert, update, delete]);
// Messages are created by visitors only
admin_endpoints!(messages, ContactMessage, "/api/admin/messages", "/api/admin/messages/{id}",
    [list, clear, delete]);

/// Registers every admin content route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    about::configure(cfg);
    skills::configure(cfg);
    projects::configure(cfg);
    blog::configure(cfg);
    github::configure(cfg);
    resume::configure(cfg);
    messages::configure(cfg);
}
