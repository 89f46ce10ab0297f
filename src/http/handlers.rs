use axum::{
    body::Bytes,
    extract::State,
    Json,
};
use serde::Serialize;

use crate::app::notifications::{BatchOutcome, NotificationService};
use crate::domain::notification::Notification;
use crate::http::AppError;
use crate::AppState;

#[derive(Serialize)]
pub(crate) struct HealthResponse {
    status: &'static str,
}

pub(crate) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Echoes the normalized record back: optional context that was absent or
/// `null` is omitted, unknown fields are dropped.
pub async fn validate_notification(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Notification>, AppError> {
    let service = NotificationService::new(state.batch_max_items);
    let notification = service.parse(&body).map_err(|err| {
        tracing::warn!(error = %err, "rejected notification");
        AppError::bad_request(err.to_string())
    })?;

    tracing::debug!(
        id = %notification.id,
        kind = %notification.kind,
        context = notification.context().as_str(),
        "accepted notification"
    );

    Ok(Json(notification))
}

pub async fn validate_notification_batch(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<BatchOutcome>, AppError> {
    let service = NotificationService::new(state.batch_max_items);
    let outcome = service.parse_batch(&body).map_err(|err| {
        tracing::warn!(error = %err, "rejected notification batch");
        AppError::bad_request(err.to_string())
    })?;

    for rejected in &outcome.errors {
        tracing::warn!(index = rejected.index, error = %rejected.error, "rejected batch item");
    }
    tracing::debug!(
        accepted = outcome.items.len(),
        rejected = outcome.errors.len(),
        "validated notification batch"
    );

    Ok(Json(outcome))
}
