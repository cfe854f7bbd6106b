//! The viewer's own profile: gamer info plus the events they joined.

use actix_web::{get, web, HttpResponse};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db::{event_repo, gamer_repo};
use crate::error::ApiError;
use crate::http::auth::JwtAuth;

#[derive(Serialize)]
pub struct ProfileUser {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}

#[derive(Serialize)]
pub struct ProfileGamerBody {
    pub user: ProfileUser,
    pub bio: String,
}

#[derive(Serialize)]
pub struct ProfileGameBody {
    pub name: String,
}

#[derive(Serialize)]
pub struct ProfileEventBody {
    pub id: i64,
    pub game: ProfileGameBody,
    pub location: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

#[derive(Serialize)]
pub struct ProfileResponse {
    pub gamer: ProfileGamerBody,
    pub events: Vec<ProfileEventBody>,
}

#[get("/profile")]
pub async fn retrieve(auth: JwtAuth, db: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    // A valid token whose gamer row has since been deleted is a 404, not
    // a server error.
    let gamer = gamer_repo::find_profile(&db, auth.gamer_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("gamer profile not found".into()))?;

    let events = event_repo::joined_events(&db, auth.gamer_id)
        .await?
        .into_iter()
        .map(|e| ProfileEventBody {
            id: e.id,
            game: ProfileGameBody { name: e.game_name },
            location: e.location,
            date: e.date,
            time: e.time,
        })
        .collect();

    let body = ProfileResponse {
        gamer: ProfileGamerBody {
            user: ProfileUser {
                first_name: gamer.first_name,
                last_name: gamer.last_name,
                username: gamer.username,
            },
            bio: gamer.bio,
        },
        events,
    };

    Ok(HttpResponse::Ok().json(body))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(retrieve);
}
