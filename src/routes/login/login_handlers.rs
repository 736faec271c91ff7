use actix_web::cookie::{time, Cookie};
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Duration;
use log::info;
use sqlx::SqlitePool;
use tera::{Context, Tera};

use super::login_models::{LoginQuery, LoginRequest};
use crate::auth::{authenticate, safe_next, SESSION_COOKIE};
use crate::config::Config;
use crate::errors::{AppResult, LOGIN_URL};
use crate::models::session::Session;
use crate::templates::render;

fn login_context(username: &str, next: Option<&str>) -> Context {
    let mut context = Context::new();
    context.insert("username", username);
    context.insert("next", safe_next(next));
    context
}

pub async fn login_get(
    tera: web::Data<Tera>,
    query: web::Query<LoginQuery>,
) -> AppResult<HttpResponse> {
    render(&tera, "login.html", &login_context("", query.next.as_deref()))
}

// login logic
pub async fn login(
    pool: web::Data<SqlitePool>,
    tera: web::Data<Tera>,
    config: web::Data<Config>,
    req: web::Form<LoginRequest>,
) -> AppResult<HttpResponse> {
    let username = req.username.trim();
    info!("Received login request for user: {}", username);

    let Some(driver) = authenticate(pool.get_ref(), username, &req.password).await? else {
        let mut context = login_context(username, req.next.as_deref());
        context.insert(
            "error",
            "Please enter a correct username and password. Note that both fields may be case-sensitive.",
        );
        return render(&tera, "login.html", &context);
    };

    let ttl = if req.remember_me {
        Duration::days(config.remember_me_ttl_days)
    } else {
        Duration::minutes(config.session_ttl_minutes)
    };
    let session = Session::create(pool.get_ref(), driver.driver_id, ttl, req.remember_me).await?;

    let mut cookie = Cookie::build(SESSION_COOKIE, session.session_id)
        .path("/")
        .http_only(true)
        .finish();
    if req.remember_me {
        cookie.set_max_age(time::Duration::days(config.remember_me_ttl_days));
    }

    info!("User {} logged in successfully", driver.username);
    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, safe_next(req.next.as_deref())))
        .cookie(cookie)
        .finish())
}

pub async fn logout(
    pool: web::Data<SqlitePool>,
    req: HttpRequest,
) -> AppResult<HttpResponse> {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        info!("Received logout request with session ID: {}", cookie.value());
        Session::delete(pool.get_ref(), cookie.value()).await?;
    }

    let mut removal = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    removal.make_removal();

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, LOGIN_URL))
        .cookie(removal)
        .finish())
}
