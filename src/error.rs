use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// The three ways a read can fail. None of them are retried.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(&'static str),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("{message}")]
    Store {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl AppError {
    pub fn store(message: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| AppError::Store { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Store { source, .. } = &self {
            error!(error = %source, "store query failed");
        }

        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
