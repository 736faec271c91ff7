use std::{env, fmt::Display, str::FromStr};

use log::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub server_address: String,
    pub session_ttl_minutes: i64,
    pub remember_me_ttl_days: i64,
    pub bcrypt_cost: u32,
}

impl Config {
    /// Reads the environment (after `.env`, if the caller loaded it).
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| {
                info!("DATABASE_URL not set, using default: sqlite://taxi.db?mode=rwc");
                "sqlite://taxi.db?mode=rwc".to_string()
            }),
            database_max_connections: try_load(&lookup, "DATABASE_MAX_CONNECTIONS", 5),
            server_address: lookup("SERVER_ADDRESS").unwrap_or_else(|| "0.0.0.0:8080".to_string()),
            session_ttl_minutes: try_load(&lookup, "SESSION_TTL_MINUTES", 30),
            remember_me_ttl_days: try_load(&lookup, "REMEMBER_ME_TTL_DAYS", 10),
            bcrypt_cost: try_load(&lookup, "BCRYPT_COST", bcrypt::DEFAULT_COST),
        }
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.server_address, "0.0.0.0:8080");
        assert_eq!(config.session_ttl_minutes, 30);
        assert_eq!(config.remember_me_ttl_days, 10);
        assert_eq!(config.bcrypt_cost, bcrypt::DEFAULT_COST);
    }

    #[test]
    fn values_are_parsed_and_bad_ones_fall_back() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("SESSION_TTL_MINUTES", "5"),
            ("BCRYPT_COST", "not-a-number"),
        ]);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.session_ttl_minutes, 5);
        assert_eq!(config.bcrypt_cost, bcrypt::DEFAULT_COST);
    }
}
