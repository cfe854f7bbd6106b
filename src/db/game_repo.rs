use sqlx::SqlitePool;

use crate::db::models::GameDetail;

/// Writable game fields shared by create and update.
pub struct GameFields<'a> {
    pub name: &'a str,
    pub num_players: i64,
    pub skill_level: i64,
    pub game_type_id: i64,
}

const DETAIL_QUERY: &str = r#"
    SELECT g.id,
           g.name,
           g.num_players,
           g.skill_level,
           gt.id        AS game_type_id,
           gt.name      AS game_type_name,
           u.first_name AS creator_first_name,
           u.last_name  AS creator_last_name,
           u.email      AS creator_email
      FROM games g
      JOIN game_types gt ON g.game_type_id = gt.id
      JOIN gamers gr     ON g.creator_id = gr.id
      JOIN users u       ON gr.user_id = u.id
"#;

pub async fn create(
    db: &SqlitePool,
    creator_id: i64,
    fields: &GameFields<'_>,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        INSERT INTO games (name, num_players, skill_level, creator_id, game_type_id)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(fields.name)
    .bind(fields.num_players)
    .bind(fields.skill_level)
    .bind(creator_id)
    .bind(fields.game_type_id)
    .fetch_one(db)
    .await
}

pub async fn find_detail(db: &SqlitePool, id: i64) -> Result<Option<GameDetail>, sqlx::Error> {
    let query = format!("{DETAIL_QUERY} WHERE g.id = ?");
    sqlx::query_as::<_, GameDetail>(&query)
        .bind(id)
        .fetch_optional(db)
        .await
}

/// All games, optionally restricted to one category.
pub async fn list_detail(
    db: &SqlitePool,
    game_type_id: Option<i64>,
) -> Result<Vec<GameDetail>, sqlx::Error> {
    match game_type_id {
        Some(type_id) => {
            let query = format!("{DETAIL_QUERY} WHERE g.game_type_id = ? ORDER BY g.id");
            sqlx::query_as::<_, GameDetail>(&query)
                .bind(type_id)
                .fetch_all(db)
                .await
        }
        None => {
            let query = format!("{DETAIL_QUERY} ORDER BY g.id");
            sqlx::query_as::<_, GameDetail>(&query).fetch_all(db).await
        }
    }
}

/// Rewrites every writable column; false when no such game exists.
pub async fn update(
    db: &SqlitePool,
    id: i64,
    creator_id: i64,
    fields: &GameFields<'_>,
) -> Result<bool, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        UPDATE games
           SET name = ?, num_players = ?, skill_level = ?, creator_id = ?, game_type_id = ?
         WHERE id = ?
        "#,
    )
    .bind(fields.name)
    .bind(fields.num_players)
    .bind(fields.skill_level)
    .bind(creator_id)
    .bind(fields.game_type_id)
    .bind(id)
    .execute(db)
    .await?
    .rows_affected();

    Ok(rows > 0)
}

pub async fn delete(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let rows = sqlx::query("DELETE FROM games WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

    Ok(rows > 0)
}

pub async fn exists(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM games WHERE id = ?)")
        .bind(id)
        .fetch_one(db)
        .await
}
