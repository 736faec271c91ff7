use serde::Serialize;
use sqlx::SqlitePool;

/// Rows of `CarDriverMapping_`, the many-to-many join between cars and drivers.
pub struct CarDriverMapping;

/// Membership of one driver in one car's driver set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AssignmentState {
    Unassigned,
    Assigned,
}

impl AssignmentState {
    pub fn flipped(self) -> Self {
        match self {
            AssignmentState::Unassigned => AssignmentState::Assigned,
            AssignmentState::Assigned => AssignmentState::Unassigned,
        }
    }
}

impl CarDriverMapping {
    pub async fn state(pool: &SqlitePool, car_id: i64, driver_id: i64) -> Result<AssignmentState, sqlx::Error> {
        let assigned: Option<i64> = sqlx::query_scalar(
            "SELECT 1 FROM CarDriverMapping_ WHERE car_id = ? AND driver_id = ?",
        )
        .bind(car_id)
        .bind(driver_id)
        .fetch_optional(pool)
        .await?;

        Ok(match assigned {
            Some(_) => AssignmentState::Assigned,
            None => AssignmentState::Unassigned,
        })
    }

    /// Adds the driver to the car if absent. Returns whether a row was added.
    pub async fn assign(pool: &SqlitePool, car_id: i64, driver_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("INSERT OR IGNORE INTO CarDriverMapping_ (car_id, driver_id) VALUES (?, ?)")
            .bind(car_id)
            .bind(driver_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Returns whether a row was removed.
    pub async fn unassign(pool: &SqlitePool, car_id: i64, driver_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM CarDriverMapping_ WHERE car_id = ? AND driver_id = ?")
            .bind(car_id)
            .bind(driver_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Flips the driver's membership and returns the new state. Every step is
    /// a single conditional statement, so overlapping toggles each flip once.
    pub async fn toggle(pool: &SqlitePool, car_id: i64, driver_id: i64) -> Result<AssignmentState, sqlx::Error> {
        if Self::unassign(pool, car_id, driver_id).await? {
            return Ok(AssignmentState::Unassigned);
        }
        if Self::assign(pool, car_id, driver_id).await? {
            return Ok(AssignmentState::Assigned);
        }
        // Another toggle inserted the row between our DELETE and INSERT.
        Self::unassign(pool, car_id, driver_id).await?;
        Ok(AssignmentState::Unassigned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flipping_twice_returns_to_start() {
        let start = AssignmentState::Unassigned;
        assert_eq!(start.flipped(), AssignmentState::Assigned);
        assert_eq!(start.flipped().flipped(), start);
    }
}
