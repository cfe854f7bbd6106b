//! Shared setup for the API integration tests: an in-memory SQLite pool
//! with migrations applied, plus request helpers.

#![allow(dead_code)]

use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::test;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use gamenight_server::db;

/// One connection only: each in-memory SQLite connection is a distinct
/// database, so a larger pool would scatter tables across connections.
pub async fn test_pool() -> SqlitePool {
    let pool = db::connect("sqlite::memory:", 1)
        .await
        .expect("in-memory pool");
    db::MIGRATOR.run(&pool).await.expect("migrations");
    pool
}

/// Registers an account and returns the bearer token.
pub async fn register<S>(app: &S, username: &str, first_name: &str, last_name: &str) -> String
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "password": "hunter2",
            "first_name": first_name,
            "last_name": last_name,
            "bio": "Just a hardcore gamer",
        }))
        .to_request();

    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), 201, "registration should succeed");

    let body: Value = test::read_body_json(resp).await;
    body["token"].as_str().expect("token in body").to_string()
}

/// Creates a game through the API and returns the serialized response.
pub async fn create_game<S>(app: &S, token: &str, name: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let req = test::TestRequest::post()
        .uri("/games")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({
            "name": name,
            "numPlayers": 5,
            "skillLevel": 5,
            "gameTypeId": 1,
        }))
        .to_request();

    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), 201, "game creation should succeed");
    test::read_body_json(resp).await
}

/// Schedules an event for a game and returns the serialized response.
pub async fn create_event<S>(app: &S, token: &str, game_id: i64, location: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let req = test::TestRequest::post()
        .uri("/events")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({
            "date": "2026-03-14",
            "time": "19:30:00",
            "location": location,
            "gameId": game_id,
        }))
        .to_request();

    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), 201, "event creation should succeed");
    test::read_body_json(resp).await
}
