use actix_web::web;

use crate::handlers::teams;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/team/{code}", web::get().to(teams::show_team))
        .route("/add/team", web::post().to(teams::add_team))
        .route("/delete/team/{code}", web::get().to(teams::delete_team));
}
