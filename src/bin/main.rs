use actix_web::{middleware::Logger, web, App, HttpServer};
use gamenight_server::{config::settings, db, http};
use std::env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    // Configuration
    let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://gamenight.db".into());
    let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".into());

    // SQLite pool + schema
    let db_pool = db::connect(&database_url, settings().max_db_connections)
        .await
        .expect("Failed to create SQLite pool");
    db::MIGRATOR
        .run(&db_pool)
        .await
        .expect("Failed to run migrations");

    log::info!("listening on {server_addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(db_pool.clone()))
            .configure(http::routes::init_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
