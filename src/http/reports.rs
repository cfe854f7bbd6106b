//! Server-rendered HTML reports: events grouped by attendee and games
//! grouped by owner. Internal, low-volume pages; the full join result is
//! materialized before grouping.

use actix_web::{get, web, HttpResponse};
use sqlx::SqlitePool;

use crate::db::report_repo;
use crate::error::ApiError;
use crate::reports::{self, UserEvents, UserGames};

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{title}</title></head>\n\
         <body>\n<h1>{title}</h1>\n{body}</body>\n</html>\n"
    )
}

fn render_user_events(groups: &[UserEvents]) -> String {
    let mut out = String::new();
    for group in groups {
        out.push_str(&format!(
            "<article>\n<header><h2>{}</h2></header>\n<ul>\n",
            escape(&group.full_name)
        ));
        for event in &group.events {
            out.push_str(&format!(
                "<li>{} at {} on {} {}</li>\n",
                escape(&event.game_name),
                escape(&event.location),
                event.date,
                event.time
            ));
        }
        out.push_str("</ul>\n</article>\n");
    }
    out
}

fn render_user_games(groups: &[UserGames]) -> String {
    let mut out = String::new();
    for group in groups {
        out.push_str(&format!(
            "<article>\n<header><h2>{}</h2></header>\n<ul>\n",
            escape(&group.full_name)
        ));
        for game in &group.games {
            out.push_str(&format!(
                "<li>{} ({} players, skill level {})</li>\n",
                escape(&game.name),
                game.num_players,
                game.skill_level
            ));
        }
        out.push_str("</ul>\n</article>\n");
    }
    out
}

/// GET /reports/userevents
#[get("/reports/userevents")]
pub async fn user_events(db: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let rows = report_repo::events_with_attendees(&db).await?;
    let groups = reports::group_events_by_user(rows);

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page("Events by Gamer", &render_user_events(&groups))))
}

/// GET /reports/usergames
#[get("/reports/usergames")]
pub async fn user_games(db: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let rows = report_repo::games_with_owners(&db).await?;
    let groups = reports::group_games_by_user(rows);

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page("Games by Gamer", &render_user_games(&groups))))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(user_events).service(user_games);
}

#[cfg(test)]
mod tests {
    use super::escape;

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(escape("<b>&x</b>"), "&lt;b&gt;&amp;x&lt;/b&gt;");
    }
}
