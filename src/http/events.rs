//! Event CRUD plus signup/withdraw.

use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::models::EventDetail;
use crate::db::{event_repo, event_repo::EventFields, game_repo};
use crate::error::ApiError;
use crate::http::auth::JwtAuth;
use crate::http::games::{GameResponse, GameTypeSummary, GamerSummary, UserSummary};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub game_id: i64,
}

#[derive(Deserialize)]
pub struct EventListQuery {
    /// Optional game filter, e.g. /events?gameId=2
    #[serde(rename = "gameId")]
    pub game_id: Option<i64>,
}

#[derive(Serialize)]
pub struct EventResponse {
    pub id: i64,
    pub game: GameResponse,
    pub creator: GamerSummary,
    pub location: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Transient, per-viewer: never persisted, recomputed on every read.
    pub joined: bool,
}

/// Attaches the viewer-specific `joined` flag while reshaping the flat
/// join row into the nested response body.
fn shape(row: EventDetail, joined: bool) -> EventResponse {
    EventResponse {
        id: row.id,
        game: GameResponse {
            id: row.game_id,
            name: row.game_name,
            num_players: row.game_num_players,
            skill_level: row.game_skill_level,
            creator: GamerSummary {
                user: UserSummary {
                    first_name: row.owner_first_name,
                    last_name: row.owner_last_name,
                    email: row.owner_email,
                },
            },
            game_type: GameTypeSummary {
                id: row.game_type_id,
                name: row.game_type_name,
            },
        },
        creator: GamerSummary {
            user: UserSummary {
                first_name: row.creator_first_name,
                last_name: row.creator_last_name,
                email: row.creator_email,
            },
        },
        location: row.location,
        date: row.date,
        time: row.time,
        joined,
    }
}

async fn validate(db: &SqlitePool, req: &EventRequest) -> Result<(), ApiError> {
    if req.location.trim().is_empty() {
        return Err(ApiError::Validation("location must not be empty".into()));
    }
    if req.location.len() > 75 {
        return Err(ApiError::Validation("location exceeds 75 characters".into()));
    }
    if !game_repo::exists(db, req.game_id).await? {
        return Err(ApiError::Validation(
            "gameId does not reference a known game".into(),
        ));
    }
    Ok(())
}

#[get("/events")]
pub async fn list(
    auth: JwtAuth,
    query: web::Query<EventListQuery>,
    db: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    let rows = event_repo::list_detail(&db, query.game_id).await?;

    let mut body = Vec::with_capacity(rows.len());
    for row in rows {
        let joined = event_repo::is_joined(&db, row.id, auth.gamer_id).await?;
        body.push(shape(row, joined));
    }

    Ok(HttpResponse::Ok().json(body))
}

#[get("/events/{id}")]
pub async fn retrieve(
    auth: JwtAuth,
    path: web::Path<i64>,
    db: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let row = event_repo::find_detail(&db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("no event with id {id}")))?;

    let joined = event_repo::is_joined(&db, id, auth.gamer_id).await?;
    Ok(HttpResponse::Ok().json(shape(row, joined)))
}

#[post("/events")]
pub async fn create(
    auth: JwtAuth,
    info: web::Json<EventRequest>,
    db: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    validate(&db, &info).await?;

    let fields = EventFields {
        date: info.date,
        time: info.time,
        location: &info.location,
        game_id: info.game_id,
    };
    let id = event_repo::create(&db, auth.gamer_id, &fields).await?;

    let row = event_repo::find_detail(&db, id)
        .await?
        .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("created event {id} vanished")))?;

    // The creator has not signed up merely by scheduling the event.
    Ok(HttpResponse::Created().json(shape(row, false)))
}

#[put("/events/{id}")]
pub async fn update(
    auth: JwtAuth,
    path: web::Path<i64>,
    info: web::Json<EventRequest>,
    db: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    validate(&db, &info).await?;

    let fields = EventFields {
        date: info.date,
        time: info.time,
        location: &info.location,
        game_id: info.game_id,
    };

    if !event_repo::update(&db, id, auth.gamer_id, &fields).await? {
        return Err(ApiError::NotFound(format!("no event with id {id}")));
    }

    Ok(HttpResponse::NoContent().finish())
}

#[delete("/events/{id}")]
pub async fn destroy(
    _auth: JwtAuth,
    path: web::Path<i64>,
    db: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    if !event_repo::delete(&db, id).await? {
        return Err(ApiError::NotFound(format!("no event with id {id}")));
    }

    Ok(HttpResponse::NoContent().finish())
}

//////////////////////////////////////////////////
// POST/DELETE /events/{id}/signup
//////////////////////////////////////////////////

async fn sign_up(
    auth: JwtAuth,
    path: web::Path<i64>,
    db: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    let event_id = path.into_inner();

    if !event_repo::exists(&db, event_id).await? {
        return Err(ApiError::NotFound(format!("no event with id {event_id}")));
    }

    if !event_repo::sign_up(&db, event_id, auth.gamer_id).await? {
        return Err(ApiError::Conflict(
            "gamer already signed up for this event".into(),
        ));
    }

    Ok(HttpResponse::Created().json(serde_json::json!({})))
}

async fn withdraw(
    auth: JwtAuth,
    path: web::Path<i64>,
    db: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    let event_id = path.into_inner();

    if !event_repo::exists(&db, event_id).await? {
        return Err(ApiError::NotFound(format!("no event with id {event_id}")));
    }

    if !event_repo::withdraw(&db, event_id, auth.gamer_id).await? {
        return Err(ApiError::NotFound(
            "not currently registered for this event".into(),
        ));
    }

    Ok(HttpResponse::NoContent().finish())
}

async fn signup_method_not_allowed() -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed)
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/events/{id}/signup")
            .route(web::post().to(sign_up))
            .route(web::delete().to(withdraw))
            .default_service(web::to(signup_method_not_allowed)),
    )
    .service(list)
    .service(retrieve)
    .service(create)
    .service(update)
    .service(destroy);
}
