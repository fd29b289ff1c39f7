use actix_web::web;

use crate::handlers::members;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/member/{id}", web::get().to(members::show_member))
        .route("/add/member/{code}", web::post().to(members::add_member))
        .route(
            "/delete/member/{id}",
            web::get().to(members::delete_member),
        )
        .route("/note/{id}", web::post().to(members::update_notes));
}
