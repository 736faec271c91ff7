use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Driver {
    pub driver_id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub license_number: String,
}

/// Fields for inserting a driver. The password is already hashed.
pub struct NewDriver<'a> {
    pub username: &'a str,
    pub password_hash: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub license_number: &'a str,
}

const SELECT_DRIVER: &str = "
    SELECT d.driver_id, d.username, d.password_hash, d.first_name, d.last_name, d.license_number
    FROM Drivers_ d";

impl Driver {
    pub async fn all(pool: &SqlitePool) -> Result<Vec<Driver>, sqlx::Error> {
        sqlx::query_as::<_, Driver>(&format!("{SELECT_DRIVER} ORDER BY d.username"))
            .fetch_all(pool)
            .await
    }

    pub async fn find(pool: &SqlitePool, driver_id: i64) -> Result<Option<Driver>, sqlx::Error> {
        sqlx::query_as::<_, Driver>(&format!("{SELECT_DRIVER} WHERE d.driver_id = ?"))
            .bind(driver_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_username(pool: &SqlitePool, username: &str) -> Result<Option<Driver>, sqlx::Error> {
        sqlx::query_as::<_, Driver>(&format!("{SELECT_DRIVER} WHERE d.username = ?"))
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Drivers assigned to a car.
    pub async fn for_car(pool: &SqlitePool, car_id: i64) -> Result<Vec<Driver>, sqlx::Error> {
        sqlx::query_as::<_, Driver>(&format!(
            "{SELECT_DRIVER}
             JOIN CarDriverMapping_ cdm ON cdm.driver_id = d.driver_id
             WHERE cdm.car_id = ?
             ORDER BY d.username"
        ))
        .bind(car_id)
        .fetch_all(pool)
        .await
    }

    pub async fn create(pool: &SqlitePool, new_driver: &NewDriver<'_>) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO Drivers_ (username, password_hash, first_name, last_name, license_number)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(new_driver.username)
        .bind(new_driver.password_hash)
        .bind(new_driver.first_name)
        .bind(new_driver.last_name)
        .bind(new_driver.license_number)
        .execute(pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn update_license(pool: &SqlitePool, driver_id: i64, license_number: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE Drivers_ SET license_number = ? WHERE driver_id = ?")
            .bind(license_number)
            .bind(driver_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Assignments and sessions of the driver are removed by cascade.
    pub async fn delete(pool: &SqlitePool, driver_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM Drivers_ WHERE driver_id = ?")
            .bind(driver_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM Drivers_")
            .fetch_one(pool)
            .await
    }
}
