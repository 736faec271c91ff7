// src/models/mod.rs

pub mod car;
pub mod car_driver_mapping;
pub mod driver;
pub mod manufacturer;
pub mod session;
