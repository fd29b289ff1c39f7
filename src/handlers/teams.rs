use actix_session::Session;
use actix_web::{HttpResponse, Result, web};
use askama::Template;

use crate::{
    database::models::{Member, NewTeamForm, Team},
    database::repositories::{MemberRepository, TeamRepository},
    error::AppError,
    handlers::shared,
    services::flash::{FlashMessage, flash, take_flash},
};

#[derive(Template)]
#[template(path = "team.html")]
struct TeamPage {
    team: Team,
    members: Vec<Member>,
    flash: Option<FlashMessage>,
}

pub async fn show_team(
    path: web::Path<String>,
    teams: web::Data<TeamRepository>,
    members: web::Data<MemberRepository>,
    session: Session,
) -> Result<HttpResponse> {
    let code = path.into_inner();

    let team = teams
        .find_by_code(&code)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound(format!("No team with code '{}'", code)))?;

    let page = TeamPage {
        members: members
            .list_for_team(&team.code)
            .await
            .map_err(AppError::from)?,
        team,
        flash: take_flash(&session),
    };

    Ok(shared::render(&page)?)
}

pub async fn add_team(
    form: web::Form<NewTeamForm>,
    teams: web::Data<TeamRepository>,
    session: Session,
) -> Result<HttpResponse> {
    let form = form.into_inner();

    // Sanitise the text inputs before they are stored
    let team = NewTeamForm {
        name: shared::sanitize(&form.name),
        code: shared::sanitize(&form.code),
        description: shared::sanitize(&form.description),
        website: shared::sanitize(&form.website),
    };

    teams.create_team(&team).await.map_err(AppError::from)?;

    flash(&session, format!("Team '{}' added", team.name), "success");
    Ok(shared::redirect(&format!("/team/{}", team.code)))
}

pub async fn delete_team(
    path: web::Path<String>,
    teams: web::Data<TeamRepository>,
    session: Session,
) -> Result<HttpResponse> {
    let code = path.into_inner();

    teams.delete_team(&code).await.map_err(AppError::from)?;

    flash(&session, "Team deleted", "success");
    Ok(shared::redirect("/"))
}
