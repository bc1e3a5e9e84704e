use axum::{routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use sqlx::SqlitePool;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub mod pages;
pub mod routes;

use routes::{leaderboard, participants, profile};

/// Builds the full application around an already connected store handle.
pub fn build_router(pool: SqlitePool) -> Router {
    Router::new()
        // JSON API
        .route("/participants", get(participants::list_participants_handler))
        .route("/students", get(participants::student_handler))
        // Pages
        .route("/", get(leaderboard::leaderboard_handler))
        .route("/profile/", get(profile::missing_email_handler))
        .route("/profile/:email", get(profile::profile_handler))
        // Layers
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        // State
        .with_state(pool)
}
