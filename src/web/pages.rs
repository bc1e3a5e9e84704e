use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

use crate::error::AppError;

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    message: String,
}

pub fn render<T: Template>(template: &T, status: StatusCode) -> Response {
    match template.render() {
        Ok(body) => (status, Html(body)).into_response(),
        Err(e) => {
            error!("Template render failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Every failure ends in the same "try again" page; only the headline
/// differs.
pub fn error_page(err: AppError) -> Response {
    let message = match &err {
        AppError::BadRequest(msg) | AppError::NotFound(msg) => msg.to_string(),
        AppError::Store { source, .. } => {
            error!(error = %source, "store query failed");
            "Failed to fetch participants data".to_string()
        }
    };

    render(&ErrorTemplate { message }, err.status())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_page_keeps_error_status() {
        let store = AppError::store("Failed to fetch data")(sqlx::Error::PoolClosed);
        assert_eq!(error_page(store).status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            error_page(AppError::BadRequest("Invalid email address provided")).status(),
            StatusCode::BAD_REQUEST
        );
    }
}
