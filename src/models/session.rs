use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    pub session_id: String,
    pub driver_id: i64,
    pub session_data: String,
    /// Unix timestamp in seconds.
    pub expires_at: i64,
    pub is_persistent: bool,
}

impl Session {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now.timestamp()
    }

    /// Decodes the session's key-value map. Corrupt data reads as empty.
    pub fn data(&self) -> Map<String, Value> {
        decode_data(&self.session_data)
    }

    pub async fn create(
        pool: &SqlitePool,
        driver_id: i64,
        ttl: Duration,
        is_persistent: bool,
    ) -> Result<Session, sqlx::Error> {
        let session = Session {
            session_id: Uuid::new_v4().to_string(),
            driver_id,
            session_data: "{}".to_string(),
            expires_at: (Utc::now() + ttl).timestamp(),
            is_persistent,
        };

        sqlx::query(
            "INSERT INTO Sessions_ (session_id, driver_id, session_data, expires_at, is_persistent)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&session.session_id)
        .bind(session.driver_id)
        .bind(&session.session_data)
        .bind(session.expires_at)
        .bind(session.is_persistent)
        .execute(pool)
        .await?;

        Ok(session)
    }

    pub async fn find(pool: &SqlitePool, session_id: &str) -> Result<Option<Session>, sqlx::Error> {
        sqlx::query_as::<_, Session>(
            "SELECT session_id, driver_id, session_data, expires_at, is_persistent
             FROM Sessions_ WHERE session_id = ?",
        )
        .bind(session_id)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &SqlitePool, session_id: &str) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM Sessions_ WHERE session_id = ?")
            .bind(session_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn delete_expired(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM Sessions_ WHERE expires_at <= ?")
            .bind(Utc::now().timestamp())
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Adds one to the integer stored under `key` (0 when absent) and returns
    /// the new value. Runs as a single statement.
    pub async fn increment(pool: &SqlitePool, session_id: &str, key: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "UPDATE Sessions_
             SET session_data = json_set(
                 CASE WHEN json_valid(session_data) THEN session_data ELSE '{}' END,
                 '$.' || ?,
                 COALESCE(
                     CASE WHEN json_valid(session_data) THEN json_extract(session_data, '$.' || ?) END,
                     0
                 ) + 1
             )
             WHERE session_id = ?
             RETURNING json_extract(session_data, '$.' || ?)",
        )
        .bind(key)
        .bind(key)
        .bind(session_id)
        .bind(key)
        .fetch_one(pool)
        .await
    }
}

fn decode_data(raw: &str) -> Map<String, Value> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(session_data: &str, expires_at: i64) -> Session {
        Session {
            session_id: "key".to_string(),
            driver_id: 1,
            session_data: session_data.to_string(),
            expires_at,
            is_persistent: false,
        }
    }

    #[test]
    fn data_decodes_object_and_tolerates_garbage() {
        assert_eq!(session(r#"{"num_visits": 3}"#, 0).data()["num_visits"], 3);
        assert!(session("not json", 0).data().is_empty());
        assert!(session("[1, 2]", 0).data().is_empty());
    }

    #[test]
    fn expiry_is_inclusive() {
        let now = Utc::now();
        assert!(session("{}", now.timestamp()).is_expired_at(now));
        assert!(!session("{}", now.timestamp() + 60).is_expired_at(now));
    }
}
