pub mod car_handlers;
pub mod car_models;
