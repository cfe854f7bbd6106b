//! Grouping of flat join rows into per-user report structures.
//!
//! A single left-to-right fold: the first row seen for a user opens that
//! user's group, later rows append to it. First-seen user order and row
//! order within a group are both preserved explicitly (a Vec of groups
//! plus an id → slot index), so the output never depends on hash-map
//! iteration order.

use chrono::{NaiveDate, NaiveTime};
use sqlx::FromRow;
use std::collections::HashMap;

/// One (event, attendee) pair from the report join.
#[derive(Debug, Clone, FromRow)]
pub struct EventAttendeeRow {
    pub id: i64,
    pub organizer_id: i64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub game_name: String,
    pub user_id: i64,
    pub full_name: String,
}

/// One (game, owner) pair from the report join.
#[derive(Debug, Clone, FromRow)]
pub struct GameOwnerRow {
    pub id: i64,
    pub name: String,
    pub game_type_id: i64,
    pub num_players: i64,
    pub skill_level: i64,
    pub user_id: i64,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventItem {
    pub id: i64,
    pub organizer_id: i64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub game_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEvents {
    pub user_id: i64,
    pub full_name: String,
    pub events: Vec<EventItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameItem {
    pub id: i64,
    pub name: String,
    pub game_type_id: i64,
    pub num_players: i64,
    pub skill_level: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserGames {
    pub user_id: i64,
    pub full_name: String,
    pub games: Vec<GameItem>,
}

/// Groups event-attendee rows by attendee. Users with no rows never
/// appear; that is a property of the upstream inner join.
pub fn group_events_by_user(rows: Vec<EventAttendeeRow>) -> Vec<UserEvents> {
    let mut slots: HashMap<i64, usize> = HashMap::new();
    let mut groups: Vec<UserEvents> = Vec::new();

    for row in rows {
        let slot = *slots.entry(row.user_id).or_insert_with(|| {
            groups.push(UserEvents {
                user_id: row.user_id,
                full_name: row.full_name.clone(),
                events: Vec::new(),
            });
            groups.len() - 1
        });

        groups[slot].events.push(EventItem {
            id: row.id,
            organizer_id: row.organizer_id,
            date: row.date,
            time: row.time,
            location: row.location,
            game_name: row.game_name,
        });
    }

    groups
}

/// Groups game-owner rows by owner.
pub fn group_games_by_user(rows: Vec<GameOwnerRow>) -> Vec<UserGames> {
    let mut slots: HashMap<i64, usize> = HashMap::new();
    let mut groups: Vec<UserGames> = Vec::new();

    for row in rows {
        let slot = *slots.entry(row.user_id).or_insert_with(|| {
            groups.push(UserGames {
                user_id: row.user_id,
                full_name: row.full_name.clone(),
                games: Vec::new(),
            });
            groups.len() - 1
        });

        groups[slot].games.push(GameItem {
            id: row.id,
            name: row.name,
            game_type_id: row.game_type_id,
            num_players: row.num_players,
            skill_level: row.skill_level,
        });
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_row(event_id: i64, user_id: i64, full_name: &str, location: &str) -> EventAttendeeRow {
        EventAttendeeRow {
            id: event_id,
            organizer_id: 1,
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
            location: location.to_string(),
            game_name: "Clue".to_string(),
            user_id,
            full_name: full_name.to_string(),
        }
    }

    #[test]
    fn groups_preserve_first_seen_user_order() {
        let rows = vec![
            event_row(10, 2, "Ada Lovelace", "The Loft"),
            event_row(11, 1, "Grace Hopper", "Basement"),
            event_row(12, 2, "Ada Lovelace", "The Loft"),
        ];

        let grouped = group_events_by_user(rows);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].user_id, 2);
        assert_eq!(grouped[1].user_id, 1);
        assert_eq!(grouped[0].events.len(), 2);
        assert_eq!(grouped[1].events.len(), 1);
    }

    #[test]
    fn items_keep_input_row_order_within_group() {
        let rows = vec![
            event_row(30, 7, "Joan Clarke", "Hall B"),
            event_row(10, 7, "Joan Clarke", "Hall A"),
            event_row(20, 7, "Joan Clarke", "Hall C"),
        ];

        let grouped = group_events_by_user(rows);

        let ids: Vec<i64> = grouped[0].events.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![30, 10, 20]);
    }

    #[test]
    fn grouping_is_deterministic() {
        let rows = vec![
            event_row(1, 5, "Ada Lovelace", "The Loft"),
            event_row(2, 3, "Grace Hopper", "Basement"),
            event_row(3, 5, "Ada Lovelace", "The Loft"),
            event_row(4, 9, "Joan Clarke", "Hall A"),
        ];

        let first = group_events_by_user(rows.clone());
        let second = group_events_by_user(rows);
        assert_eq!(first, second);
    }

    #[test]
    fn user_without_rows_never_appears() {
        let rows = vec![event_row(1, 5, "Ada Lovelace", "The Loft")];

        let grouped = group_events_by_user(rows);

        assert_eq!(grouped.len(), 1);
        assert!(grouped.iter().all(|g| g.user_id == 5));
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_events_by_user(Vec::new()).is_empty());
        assert!(group_games_by_user(Vec::new()).is_empty());
    }

    #[test]
    fn games_group_by_owner() {
        let row = |game_id: i64, user_id: i64, name: &str| GameOwnerRow {
            id: game_id,
            name: name.to_string(),
            game_type_id: 1,
            num_players: 4,
            skill_level: 3,
            user_id,
            full_name: format!("Owner {user_id}"),
        };

        let grouped = group_games_by_user(vec![
            row(1, 1, "Clue"),
            row(2, 2, "Catan"),
            row(3, 1, "Risk"),
        ]);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].full_name, "Owner 1");
        let names: Vec<&str> = grouped[0].games.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Clue", "Risk"]);
    }
}
