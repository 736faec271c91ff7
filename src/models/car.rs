use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Car {
    pub car_id: i64,
    pub model: String,
    pub manufacturer_id: i64,
    pub manufacturer_name: String,
    pub manufacturer_country: String,
}

const SELECT_CAR: &str = "
    SELECT c.car_id, c.model, c.manufacturer_id,
           m.name AS manufacturer_name, m.country AS manufacturer_country
    FROM Cars_ c
    JOIN Manufacturers_ m ON c.manufacturer_id = m.manufacturer_id";

impl Car {
    pub async fn all(pool: &SqlitePool) -> Result<Vec<Car>, sqlx::Error> {
        sqlx::query_as::<_, Car>(&format!("{SELECT_CAR} ORDER BY c.model, c.car_id"))
            .fetch_all(pool)
            .await
    }

    pub async fn find(pool: &SqlitePool, car_id: i64) -> Result<Option<Car>, sqlx::Error> {
        sqlx::query_as::<_, Car>(&format!("{SELECT_CAR} WHERE c.car_id = ?"))
            .bind(car_id)
            .fetch_optional(pool)
            .await
    }

    /// Cars a driver is assigned to.
    pub async fn for_driver(pool: &SqlitePool, driver_id: i64) -> Result<Vec<Car>, sqlx::Error> {
        sqlx::query_as::<_, Car>(&format!(
            "{SELECT_CAR}
             JOIN CarDriverMapping_ cdm ON cdm.car_id = c.car_id
             WHERE cdm.driver_id = ?
             ORDER BY c.model, c.car_id"
        ))
        .bind(driver_id)
        .fetch_all(pool)
        .await
    }

    pub async fn create(pool: &SqlitePool, model: &str, manufacturer_id: i64) -> Result<i64, sqlx::Error> {
        let result = sqlx::query("INSERT INTO Cars_ (model, manufacturer_id) VALUES (?, ?)")
            .bind(model)
            .bind(manufacturer_id)
            .execute(pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn delete(pool: &SqlitePool, car_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM Cars_ WHERE car_id = ?")
            .bind(car_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM Cars_")
            .fetch_one(pool)
            .await
    }
}
