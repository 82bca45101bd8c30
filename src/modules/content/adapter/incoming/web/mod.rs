pub mod routes;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(routes::public::get_about_handler)
        .service(routes::public::get_skills_handler)
        .service(routes::public::get_skill_categories_handler)
        .service(routes::public::get_projects_handler)
        .service(routes::public::get_blog_posts_handler)
        .service(routes::public::get_github_repos_handler)
        .service(routes::public::get_resume_handler)
        .service(routes::contact::submit_contact_handler);

    // Registered ahead of the generic `/skills/{id}` resource
    cfg.service(routes::skill_categories::delete_skill_category_handler);

    routes::admin_endpoints::configure(cfg);
}
