use sqlx::SqlitePool;

use crate::db::models::GameType;

pub async fn list(db: &SqlitePool) -> Result<Vec<GameType>, sqlx::Error> {
    sqlx::query_as::<_, GameType>("SELECT id, name FROM game_types ORDER BY id")
        .fetch_all(db)
        .await
}

pub async fn find(db: &SqlitePool, id: i64) -> Result<Option<GameType>, sqlx::Error> {
    sqlx::query_as::<_, GameType>("SELECT id, name FROM game_types WHERE id = ?")
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn exists(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM game_types WHERE id = ?)")
        .bind(id)
        .fetch_one(db)
        .await
}
