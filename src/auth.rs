//! Session-cookie authentication and the access guard.

use std::future::Future;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use chrono::Utc;
use log::{error, info};
use sqlx::SqlitePool;

use crate::errors::AppError;
use crate::models::driver::Driver;
use crate::models::session::Session;

pub const SESSION_COOKIE: &str = "sessionid";

/// The authenticated driver behind a request. Taking this as a handler
/// argument is what makes a route login-only: resolution failure answers
/// with a redirect to the login page.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub driver: Driver,
    pub session_id: String,
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let pool = req.app_data::<web::Data<SqlitePool>>().cloned();
        let session_id = req.cookie(SESSION_COOKIE).map(|c| c.value().to_string());
        let next = req.path().to_string();

        Box::pin(async move {
            let unauthenticated = || AppError::Unauthenticated { next: next.clone() };

            let Some(session_id) = session_id else {
                return Err(unauthenticated());
            };
            let Some(pool) = pool else {
                error!("Database pool missing from app data");
                return Err(unauthenticated());
            };

            let session = match Session::find(pool.get_ref(), &session_id).await? {
                Some(session) => session,
                None => {
                    info!("Invalid session ID: {}", session_id);
                    return Err(unauthenticated());
                }
            };

            if session.is_expired_at(Utc::now()) {
                info!("Session expired for session ID: {}", session_id);
                Session::delete(pool.get_ref(), &session_id).await?;
                return Err(unauthenticated());
            }

            match Driver::find(pool.get_ref(), session.driver_id).await? {
                Some(driver) => Ok(CurrentUser { driver, session_id }),
                None => Err(unauthenticated()),
            }
        })
    }
}

pub fn hash_password(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, cost)
}

/// Checks credentials; `Ok(None)` for an unknown user or wrong password.
pub async fn authenticate(
    pool: &SqlitePool,
    username: &str,
    password: &str,
) -> Result<Option<Driver>, AppError> {
    let Some(driver) = Driver::find_by_username(pool, username).await? else {
        info!("Invalid username: {}", username);
        return Ok(None);
    };

    match bcrypt::verify(password, &driver.password_hash) {
        Ok(true) => Ok(Some(driver)),
        Ok(false) => {
            info!("Invalid password for user: {}", username);
            Ok(None)
        }
        Err(e) => {
            error!("Error when checking password for user {}: {}", username, e);
            Ok(None)
        }
    }
}

/// Redirect target after login. Only local absolute paths are followed.
pub fn safe_next(next: Option<&str>) -> &str {
    match next {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => path,
        _ => "/",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_accepts_local_paths_only() {
        assert_eq!(safe_next(Some("/cars/")), "/cars/");
        assert_eq!(safe_next(Some("//evil.example")), "/");
        assert_eq!(safe_next(Some("https://evil.example")), "/");
        assert_eq!(safe_next(Some("/\\evil.example")), "/");
        assert_eq!(safe_next(None), "/");
    }

    const TEST_COST: u32 = 4;

    #[test]
    fn hashed_password_verifies() {
        let hash = hash_password("testpass123", TEST_COST).unwrap();
        assert!(bcrypt::verify("testpass123", &hash).unwrap());
        assert!(!bcrypt::verify("wrong", &hash).unwrap());
    }
}
