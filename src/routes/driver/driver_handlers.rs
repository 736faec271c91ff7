use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use log::{error, info};
use sqlx::SqlitePool;
use tera::Tera;

use super::driver_models::{DriverCreateForm, LicenseForm};
use crate::auth::{hash_password, CurrentUser};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::forms::FormErrors;
use crate::models::car::Car;
use crate::models::driver::{Driver, NewDriver};
use crate::routes::{redirect, unique_violation_column};
use crate::search::{filter_by, SearchQuery};
use crate::templates::{page_context, render, render_with_status};

async fn find_driver(pool: &SqlitePool, driver_id: i64) -> AppResult<Driver> {
    Driver::find(pool, driver_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Driver {}", driver_id)))
}

fn form_status(errors: &FormErrors) -> StatusCode {
    if errors.is_empty() { StatusCode::OK } else { StatusCode::BAD_REQUEST }
}

fn render_create_form(
    tera: &Tera,
    user: &CurrentUser,
    form: &DriverCreateForm,
    errors: &FormErrors,
) -> AppResult<HttpResponse> {
    let mut context = page_context(user);
    context.insert("form", form);
    context.insert("errors", errors);
    render_with_status(tera, "driver_form.html", &context, form_status(errors))
}

fn render_license_form(
    tera: &Tera,
    user: &CurrentUser,
    driver: &Driver,
    form: &LicenseForm,
    errors: &FormErrors,
) -> AppResult<HttpResponse> {
    let mut context = page_context(user);
    context.insert("driver", driver);
    context.insert("form", form);
    context.insert("errors", errors);
    render_with_status(tera, "license_form.html", &context, form_status(errors))
}

pub async fn driver_list(
    user: CurrentUser,
    pool: web::Data<SqlitePool>,
    tera: web::Data<Tera>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let drivers = filter_by(Driver::all(pool.get_ref()).await?, query.query(), |d| d.username.as_str());

    let mut context = page_context(&user);
    context.insert("drivers", &drivers);
    context.insert("q", query.query().unwrap_or(""));
    render(&tera, "driver_list.html", &context)
}

pub async fn driver_detail(
    user: CurrentUser,
    pool: web::Data<SqlitePool>,
    tera: web::Data<Tera>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let driver = find_driver(pool.get_ref(), path.into_inner()).await?;
    let cars = Car::for_driver(pool.get_ref(), driver.driver_id).await?;

    let mut context = page_context(&user);
    context.insert("driver", &driver);
    context.insert("cars", &cars);
    render(&tera, "driver_detail.html", &context)
}

pub async fn driver_create_get(
    user: CurrentUser,
    tera: web::Data<Tera>,
) -> AppResult<HttpResponse> {
    render_create_form(&tera, &user, &DriverCreateForm::default(), &FormErrors::default())
}

pub async fn driver_create(
    user: CurrentUser,
    pool: web::Data<SqlitePool>,
    tera: web::Data<Tera>,
    config: web::Data<Config>,
    form: web::Form<DriverCreateForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();
    let mut errors = form.validate();
    if !errors.is_empty() {
        return render_create_form(&tera, &user, &form, &errors);
    }

    let password_hash = hash_password(&form.password, config.bcrypt_cost)?;
    let new_driver = NewDriver {
        username: form.username.trim(),
        password_hash: &password_hash,
        first_name: form.first_name.trim(),
        last_name: form.last_name.trim(),
        license_number: form.license_number.trim(),
    };

    match Driver::create(pool.get_ref(), &new_driver).await {
        Ok(driver_id) => {
            info!("Driver {} registered with ID: {}", new_driver.username, driver_id);
            Ok(redirect(&format!("/drivers/{}/", driver_id)))
        }
        Err(e) => match unique_violation_column(&e).as_deref() {
            Some("license_number") => {
                errors.add("license_number", "Driver with this license number already exists.");
                render_create_form(&tera, &user, &form, &errors)
            }
            Some(_) => {
                errors.add("username", "A user with that username already exists.");
                render_create_form(&tera, &user, &form, &errors)
            }
            None => {
                error!("Failed to register driver {}: {}", new_driver.username, e);
                Err(e.into())
            }
        },
    }
}

pub async fn license_update_get(
    user: CurrentUser,
    pool: web::Data<SqlitePool>,
    tera: web::Data<Tera>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let driver = find_driver(pool.get_ref(), path.into_inner()).await?;
    let form = LicenseForm { license_number: driver.license_number.clone() };
    render_license_form(&tera, &user, &driver, &form, &FormErrors::default())
}

pub async fn license_update(
    user: CurrentUser,
    pool: web::Data<SqlitePool>,
    tera: web::Data<Tera>,
    path: web::Path<i64>,
    form: web::Form<LicenseForm>,
) -> AppResult<HttpResponse> {
    let driver = find_driver(pool.get_ref(), path.into_inner()).await?;
    let form = form.into_inner();
    let mut errors = form.validate();
    if !errors.is_empty() {
        return render_license_form(&tera, &user, &driver, &form, &errors);
    }

    match Driver::update_license(pool.get_ref(), driver.driver_id, form.license_number.trim()).await {
        Ok(true) => {
            info!("License number updated for driver: {}", driver.username);
            Ok(redirect(&format!("/drivers/{}/", driver.driver_id)))
        }
        Ok(false) => Err(AppError::not_found(format!("Driver {}", driver.driver_id))),
        Err(e) if unique_violation_column(&e).is_some() => {
            errors.add("license_number", "Driver with this license number already exists.");
            render_license_form(&tera, &user, &driver, &form, &errors)
        }
        Err(e) => {
            error!("Failed to update license for driver {}: {}", driver.driver_id, e);
            Err(e.into())
        }
    }
}

pub async fn driver_delete(
    _user: CurrentUser,
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let driver_id = path.into_inner();
    if !Driver::delete(pool.get_ref(), driver_id).await? {
        return Err(AppError::not_found(format!("Driver {}", driver_id)));
    }
    info!("Driver {} deleted", driver_id);
    Ok(redirect("/drivers/"))
}
