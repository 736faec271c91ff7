use actix_web::{web, HttpResponse};
use log::info;
use sqlx::SqlitePool;
use tera::Tera;

use crate::auth::CurrentUser;
use crate::errors::AppResult;
use crate::models::{car::Car, driver::Driver, manufacturer::Manufacturer, session::Session};
use crate::templates::{page_context, render};

/// Session key of the dashboard visit counter.
pub const NUM_VISITS_KEY: &str = "num_visits";

// Dashboard: live record counts plus this session's visit count.
pub async fn index(
    user: CurrentUser,
    pool: web::Data<SqlitePool>,
    tera: web::Data<Tera>,
) -> AppResult<HttpResponse> {
    let num_visits = Session::increment(pool.get_ref(), &user.session_id, NUM_VISITS_KEY).await?;
    info!("Dashboard visit {} for user: {}", num_visits, user.driver.username);

    let mut context = page_context(&user);
    context.insert("num_drivers", &Driver::count(pool.get_ref()).await?);
    context.insert("num_cars", &Car::count(pool.get_ref()).await?);
    context.insert("num_manufacturers", &Manufacturer::count(pool.get_ref()).await?);
    context.insert("num_visits", &num_visits);

    render(&tera, "index.html", &context)
}
