use actix_web::http::header;
use actix_web::HttpResponse;

pub mod car;
pub mod driver;
pub mod index;
pub mod login;
pub mod manufacturer;
pub mod routes;

/// 302 to `location`, the answer to every successful form POST.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// SQLite reports unique violations as "UNIQUE constraint failed: Table_.column".
pub fn unique_violation_column(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db) if db.is_unique_violation() => db
            .message()
            .rsplit('.')
            .next()
            .map(|column| column.trim().to_string()),
        _ => None,
    }
}
