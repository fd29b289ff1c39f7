use actix_session::Session;
use actix_web::{HttpResponse, Result, web};
use askama::Template;

use crate::{
    database::models::{Member, NewMemberForm, NotesForm},
    database::repositories::MemberRepository,
    error::AppError,
    handlers::shared,
    services::flash::{FlashMessage, flash, take_flash},
};

#[derive(Template)]
#[template(path = "member.html")]
struct MemberPage {
    member: Member,
    flash: Option<FlashMessage>,
}

pub async fn show_member(
    path: web::Path<i64>,
    members: web::Data<MemberRepository>,
    session: Session,
) -> Result<HttpResponse> {
    let id = path.into_inner();

    // An absent id surfaces as a store error, not a not-found page
    let member = members.get_by_id(id).await.map_err(AppError::from)?;

    let page = MemberPage {
        member,
        flash: take_flash(&session),
    };

    Ok(shared::render(&page)?)
}

pub async fn add_member(
    path: web::Path<String>,
    form: web::Form<NewMemberForm>,
    members: web::Data<MemberRepository>,
    session: Session,
) -> Result<HttpResponse> {
    let code = path.into_inner();

    // Sanitise the text inputs before they are stored
    let name = shared::sanitize(&form.name);

    members
        .create_member(&name, &code)
        .await
        .map_err(AppError::from)?;

    flash(&session, format!("Member '{}' added", name), "success");
    Ok(shared::redirect(&format!("/team/{}", code)))
}

pub async fn delete_member(
    path: web::Path<i64>,
    members: web::Data<MemberRepository>,
    session: Session,
) -> Result<HttpResponse> {
    let id = path.into_inner();

    members.delete_member(id).await.map_err(AppError::from)?;

    flash(&session, "Member deleted", "success");
    Ok(shared::redirect("/"))
}

pub async fn update_notes(
    path: web::Path<i64>,
    form: web::Form<NotesForm>,
    members: web::Data<MemberRepository>,
    session: Session,
) -> Result<HttpResponse> {
    let id = path.into_inner();

    members
        .update_notes(id, &form.notes)
        .await
        .map_err(AppError::from)?;

    flash(&session, "Notes Updated", "success");
    Ok(shared::redirect(&format!("/member/{}", id)))
}
