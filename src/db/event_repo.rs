use chrono::{NaiveDate, NaiveTime};
use sqlx::SqlitePool;

use crate::db::models::{EventDetail, ProfileEvent};

/// Writable event fields shared by create and update.
pub struct EventFields<'a> {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: &'a str,
    pub game_id: i64,
}

const DETAIL_QUERY: &str = r#"
    SELECT e.id,
           e.date,
           e.time,
           e.location,
           cu.first_name AS creator_first_name,
           cu.last_name  AS creator_last_name,
           cu.email      AS creator_email,
           g.id          AS game_id,
           g.name        AS game_name,
           g.num_players AS game_num_players,
           g.skill_level AS game_skill_level,
           gt.id         AS game_type_id,
           gt.name       AS game_type_name,
           ou.first_name AS owner_first_name,
           ou.last_name  AS owner_last_name,
           ou.email      AS owner_email
      FROM events e
      JOIN gamers c      ON e.creator_id = c.id
      JOIN users cu      ON c.user_id = cu.id
      JOIN games g       ON e.game_id = g.id
      JOIN game_types gt ON g.game_type_id = gt.id
      JOIN gamers o      ON g.creator_id = o.id
      JOIN users ou      ON o.user_id = ou.id
"#;

pub async fn create(
    db: &SqlitePool,
    creator_id: i64,
    fields: &EventFields<'_>,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        INSERT INTO events (date, time, location, creator_id, game_id)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(fields.date)
    .bind(fields.time)
    .bind(fields.location)
    .bind(creator_id)
    .bind(fields.game_id)
    .fetch_one(db)
    .await
}

pub async fn find_detail(db: &SqlitePool, id: i64) -> Result<Option<EventDetail>, sqlx::Error> {
    let query = format!("{DETAIL_QUERY} WHERE e.id = ?");
    sqlx::query_as::<_, EventDetail>(&query)
        .bind(id)
        .fetch_optional(db)
        .await
}

/// All events, optionally restricted to one game.
pub async fn list_detail(
    db: &SqlitePool,
    game_id: Option<i64>,
) -> Result<Vec<EventDetail>, sqlx::Error> {
    match game_id {
        Some(game_id) => {
            let query = format!("{DETAIL_QUERY} WHERE e.game_id = ? ORDER BY e.id");
            sqlx::query_as::<_, EventDetail>(&query)
                .bind(game_id)
                .fetch_all(db)
                .await
        }
        None => {
            let query = format!("{DETAIL_QUERY} ORDER BY e.id");
            sqlx::query_as::<_, EventDetail>(&query).fetch_all(db).await
        }
    }
}

pub async fn update(
    db: &SqlitePool,
    id: i64,
    creator_id: i64,
    fields: &EventFields<'_>,
) -> Result<bool, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        UPDATE events
           SET date = ?, time = ?, location = ?, creator_id = ?, game_id = ?
         WHERE id = ?
        "#,
    )
    .bind(fields.date)
    .bind(fields.time)
    .bind(fields.location)
    .bind(creator_id)
    .bind(fields.game_id)
    .bind(id)
    .execute(db)
    .await?
    .rows_affected();

    Ok(rows > 0)
}

pub async fn delete(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let rows = sqlx::query("DELETE FROM events WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

    Ok(rows > 0)
}

pub async fn exists(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM events WHERE id = ?)")
        .bind(id)
        .fetch_one(db)
        .await
}

/// Whether the viewing gamer is signed up for an event. "No row" is a
/// normal false, never an error; this backs the transient `joined` flag.
pub async fn is_joined(db: &SqlitePool, event_id: i64, gamer_id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM event_gamers WHERE event_id = ? AND gamer_id = ?)",
    )
    .bind(event_id)
    .bind(gamer_id)
    .fetch_one(db)
    .await
}

/// Insert-if-absent signup. The UNIQUE(event_id, gamer_id) index makes
/// the insert itself the atomicity boundary: a duplicate (including the
/// loser of a racing pair) comes back as Ok(false).
pub async fn sign_up(db: &SqlitePool, event_id: i64, gamer_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("INSERT INTO event_gamers (event_id, gamer_id) VALUES (?, ?)")
        .bind(event_id)
        .bind(gamer_id)
        .execute(db)
        .await;

    match result {
        Ok(_) => Ok(true),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Ok(false),
        Err(e) => Err(e),
    }
}

/// Removes the signup row; false when the gamer was not registered.
pub async fn withdraw(db: &SqlitePool, event_id: i64, gamer_id: i64) -> Result<bool, sqlx::Error> {
    let rows = sqlx::query("DELETE FROM event_gamers WHERE event_id = ? AND gamer_id = ?")
        .bind(event_id)
        .bind(gamer_id)
        .execute(db)
        .await?
        .rows_affected();

    Ok(rows > 0)
}

/// Events the gamer has signed up for, for the profile view.
pub async fn joined_events(
    db: &SqlitePool,
    gamer_id: i64,
) -> Result<Vec<ProfileEvent>, sqlx::Error> {
    sqlx::query_as::<_, ProfileEvent>(
        r#"
        SELECT e.id, g.name AS game_name, e.location, e.date, e.time
          FROM event_gamers eg
          JOIN events e ON eg.event_id = e.id
          JOIN games g  ON e.game_id = g.id
         WHERE eg.gamer_id = ?
         ORDER BY e.date, e.time
        "#,
    )
    .bind(gamer_id)
    .fetch_all(db)
    .await
}
