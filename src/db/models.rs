use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct GameType {
    pub id: i64,
    pub name: String,
}

/// Credential columns needed to verify a login.
#[derive(Debug, FromRow)]
pub struct AuthUser {
    pub id: i64,
    pub password_hash: String,
    pub salt: String,
}

/// One game joined with its category and its creator's user record.
#[derive(Debug, FromRow)]
pub struct GameDetail {
    pub id: i64,
    pub name: String,
    pub num_players: i64,
    pub skill_level: i64,
    pub game_type_id: i64,
    pub game_type_name: String,
    pub creator_first_name: String,
    pub creator_last_name: String,
    pub creator_email: String,
}

/// One event joined with its creator, its game, and the game's own
/// category and creator. Wide on purpose: the serialized event embeds
/// the full game representation.
#[derive(Debug, FromRow)]
pub struct EventDetail {
    pub id: i64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub creator_first_name: String,
    pub creator_last_name: String,
    pub creator_email: String,
    pub game_id: i64,
    pub game_name: String,
    pub game_num_players: i64,
    pub game_skill_level: i64,
    pub game_type_id: i64,
    pub game_type_name: String,
    pub owner_first_name: String,
    pub owner_last_name: String,
    pub owner_email: String,
}

/// Gamer + user columns backing the profile view.
#[derive(Debug, FromRow)]
pub struct ProfileGamer {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub bio: String,
}

/// Slim event row for the profile's joined-events list.
#[derive(Debug, FromRow)]
pub struct ProfileEvent {
    pub id: i64,
    pub game_name: String,
    pub location: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}
