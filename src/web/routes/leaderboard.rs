use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};
use sqlx::SqlitePool;
use tracing::warn;

use crate::services::leaderboard_service::{self, LeaderboardQuery};
use crate::web::pages;

#[derive(Template)]
#[template(path = "leaderboard.html")]
pub struct LeaderboardTemplate {
    pub rows: Vec<leaderboard_service::LeaderboardRowView>,
    pub search_query: String,
    pub total_participants: usize,
}

pub async fn leaderboard_handler(
    Query(query): Query<LeaderboardQuery>,
    State(pool): State<SqlitePool>,
) -> Response {
    let data = match leaderboard_service::build_leaderboard_page(&pool, &query).await {
        Ok(data) => data,
        Err(e) => {
            warn!("Leaderboard load failed: {}", e);
            return pages::error_page(e);
        }
    };

    let template = LeaderboardTemplate {
        rows: data.rows,
        search_query: data.search_query,
        total_participants: data.total_participants,
    };
    pages::render(&template, StatusCode::OK)
}
