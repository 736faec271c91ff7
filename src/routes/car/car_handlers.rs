use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use log::info;
use sqlx::SqlitePool;
use tera::Tera;

use super::car_models::CarForm;
use crate::auth::CurrentUser;
use crate::errors::{AppError, AppResult};
use crate::forms::FormErrors;
use crate::models::car::Car;
use crate::models::car_driver_mapping::{AssignmentState, CarDriverMapping};
use crate::models::driver::Driver;
use crate::models::manufacturer::Manufacturer;
use crate::routes::redirect;
use crate::search::{filter_by, SearchQuery};
use crate::templates::{page_context, render, render_with_status};

const LIST_URL: &str = "/cars/";

async fn find_car(pool: &SqlitePool, car_id: i64) -> AppResult<Car> {
    Car::find(pool, car_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Car {}", car_id)))
}

async fn render_form(
    pool: &SqlitePool,
    tera: &Tera,
    user: &CurrentUser,
    form: &CarForm,
    errors: &FormErrors,
) -> AppResult<HttpResponse> {
    let mut context = page_context(user);
    context.insert("manufacturers", &Manufacturer::all(pool).await?);
    context.insert("form", form);
    context.insert("errors", errors);
    let status = if errors.is_empty() { StatusCode::OK } else { StatusCode::BAD_REQUEST };
    render_with_status(tera, "car_form.html", &context, status)
}

pub async fn car_list(
    user: CurrentUser,
    pool: web::Data<SqlitePool>,
    tera: web::Data<Tera>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let cars = filter_by(Car::all(pool.get_ref()).await?, query.query(), |c| c.model.as_str());

    let mut context = page_context(&user);
    context.insert("cars", &cars);
    context.insert("q", query.query().unwrap_or(""));
    render(&tera, "car_list.html", &context)
}

pub async fn car_detail(
    user: CurrentUser,
    pool: web::Data<SqlitePool>,
    tera: web::Data<Tera>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let car = find_car(pool.get_ref(), path.into_inner()).await?;
    let drivers = Driver::for_car(pool.get_ref(), car.car_id).await?;
    let is_assigned = drivers.iter().any(|d| d.driver_id == user.driver.driver_id);

    let mut context = page_context(&user);
    context.insert("car", &car);
    context.insert("drivers", &drivers);
    context.insert("is_assigned", &is_assigned);
    render(&tera, "car_detail.html", &context)
}

pub async fn car_create_get(
    user: CurrentUser,
    pool: web::Data<SqlitePool>,
    tera: web::Data<Tera>,
) -> AppResult<HttpResponse> {
    render_form(pool.get_ref(), &tera, &user, &CarForm::default(), &FormErrors::default()).await
}

pub async fn car_create(
    user: CurrentUser,
    pool: web::Data<SqlitePool>,
    tera: web::Data<Tera>,
    form: web::Form<CarForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();
    let mut errors = form.validate();

    if let Some(manufacturer_id) = form.manufacturer_id {
        if Manufacturer::find(pool.get_ref(), manufacturer_id).await?.is_none() {
            errors.add("manufacturer_id", "Select a valid choice.");
        }
    }
    let (Some(manufacturer_id), true) = (form.manufacturer_id, errors.is_empty()) else {
        return render_form(pool.get_ref(), &tera, &user, &form, &errors).await;
    };

    let car_id = Car::create(pool.get_ref(), form.model.trim(), manufacturer_id).await?;
    info!("Car {} created with ID: {}", form.model.trim(), car_id);
    Ok(redirect(LIST_URL))
}

pub async fn car_delete(
    _user: CurrentUser,
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let car_id = path.into_inner();
    if !Car::delete(pool.get_ref(), car_id).await? {
        return Err(AppError::not_found(format!("Car {}", car_id)));
    }
    info!("Car {} deleted", car_id);
    Ok(redirect(LIST_URL))
}

// Assigns the current user to the car, or removes them if already assigned
pub async fn toggle_assign(
    user: CurrentUser,
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let car = find_car(pool.get_ref(), path.into_inner()).await?;

    let state = CarDriverMapping::toggle(pool.get_ref(), car.car_id, user.driver.driver_id).await?;
    match state {
        AssignmentState::Assigned => info!("User {} assigned to car {}", user.driver.username, car.car_id),
        AssignmentState::Unassigned => info!("User {} removed from car {}", user.driver.username, car.car_id),
    }

    Ok(redirect(&format!("/cars/{}/", car.car_id)))
}
