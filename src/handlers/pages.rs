use actix_session::Session;
use actix_web::{HttpResponse, Responder, Result, web};
use askama::Template;

use crate::{
    database::models::{Member, Team, Thing},
    database::repositories::{MemberRepository, TeamRepository, ThingRepository},
    error::AppError,
    handlers::shared,
    services::flash::{FlashMessage, take_flash},
};

#[derive(Template)]
#[template(path = "home.html")]
struct HomePage {
    teams: Vec<Team>,
    members: Vec<Member>,
    flash: Option<FlashMessage>,
}

#[derive(Template)]
#[template(path = "about.html")]
struct AboutPage {
    flash: Option<FlashMessage>,
}

#[derive(Template)]
#[template(path = "things.html")]
struct ThingsPage {
    things: Vec<Thing>,
    flash: Option<FlashMessage>,
}

pub async fn home(
    teams: web::Data<TeamRepository>,
    members: web::Data<MemberRepository>,
    session: Session,
) -> Result<HttpResponse> {
    let page = HomePage {
        teams: teams.list_teams().await.map_err(AppError::from)?,
        members: members.list_members().await.map_err(AppError::from)?,
        flash: take_flash(&session),
    };

    Ok(shared::render(&page)?)
}

pub async fn about(session: Session) -> Result<HttpResponse> {
    let page = AboutPage {
        flash: take_flash(&session),
    };

    Ok(shared::render(&page)?)
}

pub async fn things(things: web::Data<ThingRepository>, session: Session) -> Result<HttpResponse> {
    let page = ThingsPage {
        things: things.list_things().await.map_err(AppError::from)?,
        flash: take_flash(&session),
    };

    Ok(shared::render(&page)?)
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now()
    }))
}
