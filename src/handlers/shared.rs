use actix_web::{HttpResponse, http::header, http::header::ContentType};
use askama::Template;

use crate::error::AppError;

/// Render a page template into a `text/html` response.
pub fn render<T: Template>(page: &T) -> Result<HttpResponse, AppError> {
    let body = page.render()?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}

/// 302 redirect to the given location.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location.to_string()))
        .finish()
}

/// HTML-escape user-supplied text before it is stored.
pub fn sanitize(input: &str) -> String {
    html_escape::encode_safe(input).into_owned()
}
