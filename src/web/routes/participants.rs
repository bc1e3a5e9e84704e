use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde_json::Value;
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::services::participants_service;

pub async fn list_participants_handler(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Value>>, AppError> {
    participants_service::list_participants(&pool).await.map(Json)
}

pub async fn student_handler(
    State(pool): State<SqlitePool>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Value>, AppError> {
    let Query(pairs) =
        query.map_err(|_| AppError::BadRequest("Email query parameter is required"))?;

    // Repeated `email` keys are allowed; the first one wins.
    let email = pairs
        .iter()
        .find(|(key, _)| key == "email")
        .map(|(_, value)| value.as_str());

    participants_service::find_participant(&pool, email)
        .await
        .map(Json)
}
