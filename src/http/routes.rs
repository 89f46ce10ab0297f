use axum::{routing::get, routing::post, Router};

use crate::AppState;
use crate::http::handlers;

pub fn health() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health))
}

pub fn notifications() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications/validate",
            post(handlers::validate_notification),
        )
        .route(
            "/notifications/validate/batch",
            post(handlers::validate_notification_batch),
        )
}
