pub mod manufacturer_handlers;
pub mod manufacturer_models;
