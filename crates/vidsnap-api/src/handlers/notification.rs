//! Notification read handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use crate::dto::response::NotificationResponse;
use crate::error::ApiError;
use crate::handlers::file::not_found_body;
use crate::state::AppState;

/// GET /notifications/{id}
pub async fn get_notification(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    match state.notification_service.get_notification_by_id(id).await? {
        Some(n) => Ok(Json(NotificationResponse::from(n)).into_response()),
        None => Ok(not_found_body("Notification not found")),
    }
}

/// GET /users/{user_id}/notifications
pub async fn notifications_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<NotificationResponse>>, ApiError> {
    let notifications = state
        .notification_service
        .get_notifications_by_user(&user_id)
        .await?;
    Ok(Json(
        notifications
            .into_iter()
            .map(NotificationResponse::from)
            .collect(),
    ))
}
