use actix_web::web;

pub mod members;
pub mod pages;
pub mod teams;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(pages::configure)
        .configure(teams::configure)
        .configure(members::configure);
}
