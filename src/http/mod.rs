pub mod auth;
pub mod events;
pub mod game_types;
pub mod games;
pub mod health;
pub mod profile;
pub mod reports;
pub mod routes;
