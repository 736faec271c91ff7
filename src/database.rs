use log::info;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::models::session::Session;

/// Opens the pool, applies pending migrations and purges expired sessions.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let mut options = SqlitePoolOptions::new().max_connections(max_connections);

    // Every connection to `sqlite::memory:` is its own database.
    if database_url.contains(":memory:") {
        options = options
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    let pool = options.connect(database_url).await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let purged = Session::delete_expired(&pool).await?;
    info!("Database ready at {}, purged {} expired sessions", database_url, purged);

    Ok(pool)
}
