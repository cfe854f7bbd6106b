//! Game catalog CRUD.

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::models::GameDetail;
use crate::db::{game_repo, game_repo::GameFields, game_type_repo};
use crate::error::ApiError;
use crate::http::auth::JwtAuth;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRequest {
    pub name: String,
    pub num_players: i64,
    pub skill_level: i64,
    pub game_type_id: i64,
}

#[derive(Deserialize)]
pub struct GameListQuery {
    /// Optional game-type filter, e.g. /games?type=1
    #[serde(rename = "type")]
    pub game_type: Option<i64>,
}

#[derive(Serialize)]
pub struct UserSummary {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Serialize)]
pub struct GamerSummary {
    pub user: UserSummary,
}

#[derive(Serialize)]
pub struct GameTypeSummary {
    pub id: i64,
    pub name: String,
}

#[derive(Serialize)]
pub struct GameResponse {
    pub id: i64,
    pub name: String,
    pub num_players: i64,
    pub skill_level: i64,
    pub creator: GamerSummary,
    pub game_type: GameTypeSummary,
}

impl From<GameDetail> for GameResponse {
    fn from(row: GameDetail) -> Self {
        GameResponse {
            id: row.id,
            name: row.name,
            num_players: row.num_players,
            skill_level: row.skill_level,
            creator: GamerSummary {
                user: UserSummary {
                    first_name: row.creator_first_name,
                    last_name: row.creator_last_name,
                    email: row.creator_email,
                },
            },
            game_type: GameTypeSummary {
                id: row.game_type_id,
                name: row.game_type_name,
            },
        }
    }
}

/// Field checks shared by create and update; referenced game types must
/// exist for the row to be saveable.
async fn validate(db: &SqlitePool, req: &GameRequest) -> Result<(), ApiError> {
    if req.name.trim().is_empty() {
        return Err(ApiError::Validation("name must not be empty".into()));
    }
    if req.name.len() > 100 {
        return Err(ApiError::Validation("name exceeds 100 characters".into()));
    }
    if req.num_players < 1 {
        return Err(ApiError::Validation("numPlayers must be at least 1".into()));
    }
    if req.skill_level < 1 {
        return Err(ApiError::Validation("skillLevel must be at least 1".into()));
    }
    if !game_type_repo::exists(db, req.game_type_id).await? {
        return Err(ApiError::Validation(
            "gameTypeId does not reference a known game type".into(),
        ));
    }
    Ok(())
}

#[get("/games")]
pub async fn list(
    _auth: JwtAuth,
    query: web::Query<GameListQuery>,
    db: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    let games = game_repo::list_detail(&db, query.game_type).await?;
    let body: Vec<GameResponse> = games.into_iter().map(GameResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

#[get("/games/{id}")]
pub async fn retrieve(
    _auth: JwtAuth,
    path: web::Path<i64>,
    db: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    match game_repo::find_detail(&db, id).await? {
        Some(game) => Ok(HttpResponse::Ok().json(GameResponse::from(game))),
        None => Err(ApiError::NotFound(format!("no game with id {id}"))),
    }
}

#[post("/games")]
pub async fn create(
    auth: JwtAuth,
    info: web::Json<GameRequest>,
    db: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    validate(&db, &info).await?;

    let fields = GameFields {
        name: &info.name,
        num_players: info.num_players,
        skill_level: info.skill_level,
        game_type_id: info.game_type_id,
    };
    let id = game_repo::create(&db, auth.gamer_id, &fields).await?;

    // Echo the stored row back, creator and category resolved.
    let game = game_repo::find_detail(&db, id)
        .await?
        .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("created game {id} vanished")))?;

    Ok(HttpResponse::Created().json(GameResponse::from(game)))
}

#[put("/games/{id}")]
pub async fn update(
    auth: JwtAuth,
    path: web::Path<i64>,
    info: web::Json<GameRequest>,
    db: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    validate(&db, &info).await?;

    let fields = GameFields {
        name: &info.name,
        num_players: info.num_players,
        skill_level: info.skill_level,
        game_type_id: info.game_type_id,
    };

    if !game_repo::update(&db, id, auth.gamer_id, &fields).await? {
        return Err(ApiError::NotFound(format!("no game with id {id}")));
    }

    Ok(HttpResponse::NoContent().finish())
}

#[delete("/games/{id}")]
pub async fn destroy(
    _auth: JwtAuth,
    path: web::Path<i64>,
    db: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    if !game_repo::delete(&db, id).await? {
        return Err(ApiError::NotFound(format!("no game with id {id}")));
    }

    Ok(HttpResponse::NoContent().finish())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list)
        .service(retrieve)
        .service(create)
        .service(update)
        .service(destroy);
}
