use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};

use taxi_service::{config::Config, database, routes, templates};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::load();

    let pool = database::init_pool(&config.database_url, config.database_max_connections)
        .await
        .map_err(|e| {
            error!("Failed to create pool: {}", e);
            std::io::Error::new(std::io::ErrorKind::Other, e)
        })?;

    let tera = templates::init_templates().map_err(|e| {
        error!("Failed to compile templates: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;

    let server_address = config.server_address.clone();
    info!("Server running at http://{}", server_address);

    let pool = web::Data::new(pool);
    let tera = web::Data::new(tera);
    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(pool.clone())
            .app_data(tera.clone())
            .app_data(config.clone())
            .configure(routes::routes::configure)
    })
    .bind(server_address)?
    .run()
    .await
}
