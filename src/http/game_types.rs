//! Read-only game category endpoints.

use actix_web::{get, web, HttpResponse};
use sqlx::SqlitePool;

use crate::db::game_type_repo;
use crate::error::ApiError;
use crate::http::auth::JwtAuth;

#[get("/gametypes")]
pub async fn list(_auth: JwtAuth, db: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let types = game_type_repo::list(&db).await?;
    Ok(HttpResponse::Ok().json(types))
}

#[get("/gametypes/{id}")]
pub async fn retrieve(
    _auth: JwtAuth,
    path: web::Path<i64>,
    db: web::Data<SqlitePool>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    match game_type_repo::find(&db, id).await? {
        Some(game_type) => Ok(HttpResponse::Ok().json(game_type)),
        None => Err(ApiError::NotFound(format!("no game type with id {id}"))),
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list).service(retrieve);
}
