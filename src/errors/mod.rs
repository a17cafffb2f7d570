use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use crate::views;

#[derive(Debug)]
pub enum AppError {
    DatabaseError(String),
    ConfigError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Config Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl From<AppError> for std::io::Error {
    fn from(err: AppError) -> Self {
        std::io::Error::new(std::io::ErrorKind::Other, err.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        // storage details stay in the log, not in the page
        let message = match self {
            AppError::DatabaseError(_) => "Database error",
            AppError::ConfigError(_) => "Server configuration error",
        };
        if let AppError::DatabaseError(detail) = self {
            log::error!("Database error while rendering page: {}", detail);
        }
        HttpResponse::build(self.status_code())
            .content_type(views::HTML_CONTENT_TYPE)
            .body(views::error_page(message))
    }
}
