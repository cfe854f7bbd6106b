//! Flat join queries feeding the HTML reports. Each row is one
//! event-attendee or game-owner pair; grouping happens in `crate::reports`.

use sqlx::SqlitePool;

use crate::reports::{EventAttendeeRow, GameOwnerRow};

/// One row per (event, attendee) pair, in join order. Events nobody has
/// joined do not appear (inner-join semantics).
pub async fn events_with_attendees(db: &SqlitePool) -> Result<Vec<EventAttendeeRow>, sqlx::Error> {
    sqlx::query_as::<_, EventAttendeeRow>(
        r#"
        SELECT e.id,
               e.creator_id                      AS organizer_id,
               e.date,
               e.time,
               e.location,
               g.name                            AS game_name,
               u.id                              AS user_id,
               u.first_name || ' ' || u.last_name AS full_name
          FROM events e
          JOIN games g         ON e.game_id = g.id
          JOIN event_gamers eg ON eg.event_id = e.id
          JOIN gamers gr       ON eg.gamer_id = gr.id
          JOIN users u         ON gr.user_id = u.id
        "#,
    )
    .fetch_all(db)
    .await
}

/// One row per (game, owner) pair, in join order.
pub async fn games_with_owners(db: &SqlitePool) -> Result<Vec<GameOwnerRow>, sqlx::Error> {
    sqlx::query_as::<_, GameOwnerRow>(
        r#"
        SELECT g.id,
               g.name,
               g.game_type_id,
               g.num_players,
               g.skill_level,
               u.id                              AS user_id,
               u.first_name || ' ' || u.last_name AS full_name
          FROM games g
          JOIN gamers gr ON g.creator_id = gr.id
          JOIN users u   ON gr.user_id = u.id
        "#,
    )
    .fetch_all(db)
    .await
}
