use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use sqlx::SqlitePool;
use tracing::warn;

use crate::error::AppError;
use crate::services::profile_service;
use crate::web::pages;

#[derive(Template)]
#[template(path = "profile.html")]
pub struct ProfileTemplate {
    pub view: profile_service::ProfileView,
}

pub async fn profile_handler(
    Path(email): Path<String>,
    State(pool): State<SqlitePool>,
) -> Response {
    match profile_service::load_profile_view(&pool, &email).await {
        Ok(view) => pages::render(&ProfileTemplate { view }, StatusCode::OK),
        Err(e) => {
            warn!("Profile load failed for {}: {}", email, e);
            pages::error_page(e)
        }
    }
}

/// `/profile/` with nothing after the slash never reaches `profile_handler`.
pub async fn missing_email_handler() -> Response {
    pages::error_page(AppError::BadRequest("Invalid email address provided"))
}
