use crate::http;
use actix_web::web;

/// Mount every HTTP sub-module.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(http::auth::init_routes)
        .configure(http::game_types::init_routes)
        .configure(http::games::init_routes)
        .configure(http::events::init_routes)
        .configure(http::profile::init_routes)
        .configure(http::reports::init_routes)
        .configure(http::health::init_routes);
}
