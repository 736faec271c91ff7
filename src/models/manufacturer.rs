use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Manufacturer {
    pub manufacturer_id: i64,
    pub name: String,
    pub country: String,
}

impl Manufacturer {
    pub async fn all(pool: &SqlitePool) -> Result<Vec<Manufacturer>, sqlx::Error> {
        sqlx::query_as::<_, Manufacturer>(
            "SELECT manufacturer_id, name, country FROM Manufacturers_ ORDER BY name",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find(pool: &SqlitePool, manufacturer_id: i64) -> Result<Option<Manufacturer>, sqlx::Error> {
        sqlx::query_as::<_, Manufacturer>(
            "SELECT manufacturer_id, name, country FROM Manufacturers_ WHERE manufacturer_id = ?",
        )
        .bind(manufacturer_id)
        .fetch_optional(pool)
        .await
    }

    pub async fn create(pool: &SqlitePool, name: &str, country: &str) -> Result<i64, sqlx::Error> {
        let result = sqlx::query("INSERT INTO Manufacturers_ (name, country) VALUES (?, ?)")
            .bind(name)
            .bind(country)
            .execute(pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn update(pool: &SqlitePool, manufacturer_id: i64, name: &str, country: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE Manufacturers_ SET name = ?, country = ? WHERE manufacturer_id = ?")
            .bind(name)
            .bind(country)
            .bind(manufacturer_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Cars of the manufacturer go with it (ON DELETE CASCADE).
    pub async fn delete(pool: &SqlitePool, manufacturer_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM Manufacturers_ WHERE manufacturer_id = ?")
            .bind(manufacturer_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM Manufacturers_")
            .fetch_one(pool)
            .await
    }
}
