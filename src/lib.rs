pub mod auth;
pub mod config;
pub mod database;
pub mod errors;
pub mod forms;
pub mod models;
pub mod routes;
pub mod search;
pub mod templates;
