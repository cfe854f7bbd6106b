pub mod event_repo;
pub mod game_repo;
pub mod game_type_repo;
pub mod gamer_repo;
pub mod models;
pub mod report_repo;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Embedded schema migrations, applied at startup.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Opens the SQLite pool. Foreign keys must be enabled per connection or
/// the ON DELETE CASCADE clauses never fire.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}
