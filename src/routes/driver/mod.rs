pub mod driver_handlers;
pub mod driver_models;
