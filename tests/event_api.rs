mod common;

use actix_web::{test, web, App};
use gamenight_server::http;
use serde_json::{json, Value};

#[actix_web::test]
async fn create_event_embeds_game_and_starts_unjoined() {
    let pool = common::test_pool().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .configure(http::routes::init_routes),
    )
    .await;

    let token = common::register(&app, "jweckert17", "Jacob", "Eckert").await;
    let game = common::create_game(&app, &token, "Clue").await;
    let game_id = game["id"].as_i64().unwrap();

    let event = common::create_event(&app, &token, game_id, "The Loft").await;

    assert_eq!(event["location"], json!("The Loft"));
    assert_eq!(event["date"], json!("2026-03-14"));
    assert_eq!(event["time"], json!("19:30:00"));
    assert_eq!(event["game"]["name"], json!("Clue"));
    assert_eq!(event["creator"]["user"]["first_name"], json!("Jacob"));
    assert_eq!(event["joined"], json!(false));
}

#[actix_web::test]
async fn missing_event_is_404() {
    let pool = common::test_pool().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .configure(http::routes::init_routes),
    )
    .await;

    let token = common::register(&app, "jweckert17", "Jacob", "Eckert").await;

    let req = test::TestRequest::get()
        .uri("/events/42")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn list_filters_by_game_id() {
    let pool = common::test_pool().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .configure(http::routes::init_routes),
    )
    .await;

    let token = common::register(&app, "jweckert17", "Jacob", "Eckert").await;
    let clue = common::create_game(&app, &token, "Clue").await;
    let catan = common::create_game(&app, &token, "Catan").await;
    let clue_id = clue["id"].as_i64().unwrap();
    let catan_id = catan["id"].as_i64().unwrap();

    common::create_event(&app, &token, clue_id, "The Loft").await;
    common::create_event(&app, &token, catan_id, "Basement").await;
    common::create_event(&app, &token, catan_id, "Hall B").await;

    let req = test::TestRequest::get()
        .uri(&format!("/events?gameId={catan_id}"))
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    let events = body.as_array().unwrap();
    assert_eq!(events.len(), 2);
    assert!(events
        .iter()
        .all(|e| e["game"]["id"].as_i64() == Some(catan_id)));
}

#[actix_web::test]
async fn update_then_retrieve_reflects_the_payload() {
    let pool = common::test_pool().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .configure(http::routes::init_routes),
    )
    .await;

    let token = common::register(&app, "jweckert17", "Jacob", "Eckert").await;
    let game = common::create_game(&app, &token, "Clue").await;
    let game_id = game["id"].as_i64().unwrap();
    let event = common::create_event(&app, &token, game_id, "The Loft").await;
    let id = event["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/events/{id}"))
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({
            "date": "2026-04-01",
            "time": "18:00:00",
            "location": "Hall C",
            "gameId": game_id,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 204);

    let req = test::TestRequest::get()
        .uri(&format!("/events/{id}"))
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["location"], json!("Hall C"));
    assert_eq!(body["date"], json!("2026-04-01"));
    assert_eq!(body["time"], json!("18:00:00"));
}

#[actix_web::test]
async fn delete_twice_yields_204_then_404() {
    let pool = common::test_pool().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .configure(http::routes::init_routes),
    )
    .await;

    let token = common::register(&app, "jweckert17", "Jacob", "Eckert").await;
    let game = common::create_game(&app, &token, "Clue").await;
    let event = common::create_event(&app, &token, game["id"].as_i64().unwrap(), "The Loft").await;
    let id = event["id"].as_i64().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/events/{id}"))
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 204);

    let req = test::TestRequest::delete()
        .uri(&format!("/events/{id}"))
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn event_with_unknown_game_is_a_validation_failure() {
    let pool = common::test_pool().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .configure(http::routes::init_routes),
    )
    .await;

    let token = common::register(&app, "jweckert17", "Jacob", "Eckert").await;

    let req = test::TestRequest::post()
        .uri("/events")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({
            "date": "2026-03-14",
            "time": "19:30:00",
            "location": "The Loft",
            "gameId": 999,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}
