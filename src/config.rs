//! Runtime configuration for the Gamenight server.

use once_cell::sync::Lazy;
use std::env;

#[derive(Debug)]
pub struct Settings {
    /// Access-token lifetime (minutes).
    pub token_ttl_minutes: i64,
    /// Maximum size of the SQLite connection pool.
    pub max_db_connections: u32,
}

impl Settings {
    fn from_env() -> Self {
        let token_ttl_minutes = env::var("TOKEN_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(24 * 60);

        let max_db_connections = env::var("MAX_DB_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(5);

        Settings {
            token_ttl_minutes,
            max_db_connections,
        }
    }
}

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

pub fn settings() -> &'static Settings {
    &SETTINGS
}
