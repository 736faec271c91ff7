use actix_web::web;

use super::index::index_handlers;

pub fn index_configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index_handlers::index));
}

use super::login::login_handlers;

pub fn login_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/accounts")
            .route("/login/", web::get().to(login_handlers::login_get))
            .route("/login/", web::post().to(login_handlers::login))
            .route("/logout/", web::post().to(login_handlers::logout))
    );
}

use super::manufacturer::manufacturer_handlers;

pub fn manufacturer_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/manufacturers")
            .route("/", web::get().to(manufacturer_handlers::manufacturer_list))
            .route("/create/", web::get().to(manufacturer_handlers::manufacturer_create_get))
            .route("/create/", web::post().to(manufacturer_handlers::manufacturer_create))
            .route("/{manufacturer_id}/update/", web::get().to(manufacturer_handlers::manufacturer_update_get))
            .route("/{manufacturer_id}/update/", web::post().to(manufacturer_handlers::manufacturer_update))
            .route("/{manufacturer_id}/delete/", web::post().to(manufacturer_handlers::manufacturer_delete))
    );
}

use super::car::car_handlers;

pub fn car_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/cars")
            .route("/", web::get().to(car_handlers::car_list))
            .route("/create/", web::get().to(car_handlers::car_create_get))
            .route("/create/", web::post().to(car_handlers::car_create))
            .route("/{car_id}/", web::get().to(car_handlers::car_detail))
            .route("/{car_id}/delete/", web::post().to(car_handlers::car_delete))
            .route("/{car_id}/toggle-assign/", web::post().to(car_handlers::toggle_assign))
    );
}

use super::driver::driver_handlers;

pub fn driver_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/drivers")
            .route("/", web::get().to(driver_handlers::driver_list))
            .route("/create/", web::get().to(driver_handlers::driver_create_get))
            .route("/create/", web::post().to(driver_handlers::driver_create))
            .route("/{driver_id}/", web::get().to(driver_handlers::driver_detail))
            .route("/{driver_id}/update/", web::get().to(driver_handlers::license_update_get))
            .route("/{driver_id}/update/", web::post().to(driver_handlers::license_update))
            .route("/{driver_id}/delete/", web::post().to(driver_handlers::driver_delete))
    );
}

/// Every route of the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(index_configure)
        .configure(login_configure)
        .configure(manufacturer_configure)
        .configure(car_configure)
        .configure(driver_configure);
}
