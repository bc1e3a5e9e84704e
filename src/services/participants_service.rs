use serde_json::Value;
use sqlx::SqlitePool;

use crate::database::participants_repo;
use crate::error::AppError;

pub async fn list_participants(pool: &SqlitePool) -> Result<Vec<Value>, AppError> {
    participants_repo::list_documents(pool)
        .await
        .map_err(AppError::store("Failed to fetch studyjams data"))
}

/// Exact-match lookup of one stored document. `None` and `""` are both
/// treated as a missing parameter.
pub async fn find_participant(pool: &SqlitePool, email: Option<&str>) -> Result<Value, AppError> {
    let email = email
        .filter(|e| !e.is_empty())
        .ok_or(AppError::BadRequest("Email query parameter is required"))?;

    participants_repo::find_document_by_email(pool, email)
        .await
        .map_err(AppError::store("Failed to fetch data"))?
        .ok_or(AppError::NotFound("No studyjam found for this email"))
}
