use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use log::{error, info};
use sqlx::SqlitePool;
use tera::Tera;

use super::manufacturer_models::ManufacturerForm;
use crate::auth::CurrentUser;
use crate::errors::{AppError, AppResult};
use crate::forms::FormErrors;
use crate::models::manufacturer::Manufacturer;
use crate::routes::{redirect, unique_violation_column};
use crate::search::{filter_by, SearchQuery};
use crate::templates::{page_context, render, render_with_status};

const LIST_URL: &str = "/manufacturers/";

fn render_form(
    tera: &Tera,
    user: &CurrentUser,
    manufacturer_id: Option<i64>,
    form: &ManufacturerForm,
    errors: &FormErrors,
) -> AppResult<HttpResponse> {
    let mut context = page_context(user);
    context.insert("manufacturer_id", &manufacturer_id);
    context.insert("form", form);
    context.insert("errors", errors);
    let status = if errors.is_empty() { StatusCode::OK } else { StatusCode::BAD_REQUEST };
    render_with_status(tera, "manufacturer_form.html", &context, status)
}

pub async fn manufacturer_list(
    user: CurrentUser,
    pool: web::Data<SqlitePool>,
    tera: web::Data<Tera>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let manufacturers = filter_by(Manufacturer::all(pool.get_ref()).await?, query.query(), |m| m.name.as_str());

    let mut context = page_context(&user);
    context.insert("manufacturers", &manufacturers);
    context.insert("q", query.query().unwrap_or(""));
    render(&tera, "manufacturer_list.html", &context)
}

pub async fn manufacturer_create_get(
    user: CurrentUser,
    tera: web::Data<Tera>,
) -> AppResult<HttpResponse> {
    render_form(&tera, &user, None, &ManufacturerForm::default(), &FormErrors::default())
}

pub async fn manufacturer_create(
    user: CurrentUser,
    pool: web::Data<SqlitePool>,
    tera: web::Data<Tera>,
    form: web::Form<ManufacturerForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();
    let mut errors = form.validate();
    if !errors.is_empty() {
        return render_form(&tera, &user, None, &form, &errors);
    }

    match Manufacturer::create(pool.get_ref(), form.name.trim(), form.country.trim()).await {
        Ok(manufacturer_id) => {
            info!("Manufacturer {} created with ID: {}", form.name.trim(), manufacturer_id);
            Ok(redirect(LIST_URL))
        }
        Err(e) if unique_violation_column(&e).is_some() => {
            errors.add("name", "Manufacturer with this name already exists.");
            render_form(&tera, &user, None, &form, &errors)
        }
        Err(e) => {
            error!("Failed to create manufacturer {}: {}", form.name, e);
            Err(e.into())
        }
    }
}

pub async fn manufacturer_update_get(
    user: CurrentUser,
    pool: web::Data<SqlitePool>,
    tera: web::Data<Tera>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let manufacturer_id = path.into_inner();
    let manufacturer = Manufacturer::find(pool.get_ref(), manufacturer_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Manufacturer {}", manufacturer_id)))?;

    let form = ManufacturerForm { name: manufacturer.name, country: manufacturer.country };
    render_form(&tera, &user, Some(manufacturer_id), &form, &FormErrors::default())
}

pub async fn manufacturer_update(
    user: CurrentUser,
    pool: web::Data<SqlitePool>,
    tera: web::Data<Tera>,
    path: web::Path<i64>,
    form: web::Form<ManufacturerForm>,
) -> AppResult<HttpResponse> {
    let manufacturer_id = path.into_inner();
    let form = form.into_inner();
    let mut errors = form.validate();
    if !errors.is_empty() {
        return render_form(&tera, &user, Some(manufacturer_id), &form, &errors);
    }

    match Manufacturer::update(pool.get_ref(), manufacturer_id, form.name.trim(), form.country.trim()).await {
        Ok(true) => {
            info!("Manufacturer {} updated", manufacturer_id);
            Ok(redirect(LIST_URL))
        }
        Ok(false) => Err(AppError::not_found(format!("Manufacturer {}", manufacturer_id))),
        Err(e) if unique_violation_column(&e).is_some() => {
            errors.add("name", "Manufacturer with this name already exists.");
            render_form(&tera, &user, Some(manufacturer_id), &form, &errors)
        }
        Err(e) => {
            error!("Failed to update manufacturer {}: {}", manufacturer_id, e);
            Err(e.into())
        }
    }
}

pub async fn manufacturer_delete(
    _user: CurrentUser,
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let manufacturer_id = path.into_inner();
    if !Manufacturer::delete(pool.get_ref(), manufacturer_id).await? {
        return Err(AppError::not_found(format!("Manufacturer {}", manufacturer_id)));
    }
    info!("Manufacturer {} deleted", manufacturer_id);
    Ok(redirect(LIST_URL))
}
