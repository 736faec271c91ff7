use actix_web::http::{header, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use log::error;
use thiserror::Error;

pub const LOGIN_URL: &str = "/accounts/login/";

/// Request-terminal failures. Form validation is not an error here: forms
/// re-render themselves with field messages.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Authentication required for {next}")]
    Unauthenticated { next: String },

    #[error("{0} not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn login_redirect_location(next: &str) -> String {
        match serde_urlencoded::to_string([("next", next)]) {
            Ok(query) => format!("{}?{}", LOGIN_URL, query),
            Err(_) => LOGIN_URL.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated { .. } => StatusCode::FOUND,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Template(_) | AppError::PasswordHash(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Unauthenticated { next } => HttpResponse::Found()
                .insert_header((header::LOCATION, AppError::login_redirect_location(next)))
                .finish(),
            AppError::NotFound(_) => HttpResponse::NotFound().body(self.to_string()),
            _ => {
                error!("Request failed: {}", self);
                HttpResponse::InternalServerError().body("Internal server error")
            }
        }
    }
}
