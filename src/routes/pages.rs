use actix_web::web;

use crate::handlers::pages;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(pages::home))
        .route("/about/", web::get().to(pages::about))
        .route("/things/", web::get().to(pages::things))
        .route("/health", web::get().to(pages::health));
}
