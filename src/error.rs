use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header::ContentType};
use askama::Template;
use thiserror::Error;

use crate::services::flash::FlashMessage;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Template error: {0}")]
    TemplateError(#[from] askama::Error),

    #[error("Internal server error{}", .0.as_ref().map_or("".to_string(), |s| format!(": {}", s)))]
    InternalServerError(Option<String>),
}

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundPage {
    flash: Option<FlashMessage>,
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPage {
    flash: Option<FlashMessage>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::TemplateError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        log::error!("Request failed with status {}: {}", status_code, self);

        let body = match self {
            AppError::NotFound(_) => NotFoundPage { flash: None }.render(),
            _ => ErrorPage { flash: None }.render(),
        };

        // Fall back to a bare status line if the error page itself fails
        let body = body.unwrap_or_else(|_| status_code.to_string());

        HttpResponse::build(status_code)
            .content_type(ContentType::html())
            .body(body)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        log::error!("Database error: {}", error);
        AppError::DatabaseError(error)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        log::error!("Anyhow error: {}", error);

        // Check if this is a sqlx::Error and handle it appropriately
        if error.is::<sqlx::Error>() {
            // Downcast the error to sqlx::Error by consuming the anyhow::Error
            match error.downcast::<sqlx::Error>() {
                Ok(sqlx_err) => return AppError::DatabaseError(sqlx_err),
                Err(original_error) => {
                    return AppError::InternalServerError(Some(original_error.to_string()));
                }
            }
        }

        AppError::InternalServerError(Some(error.to_string()))
    }
}
