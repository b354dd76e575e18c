//! Health check handler.

use axum::Json;

use crate::dto::response::HealthResponse;

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Health Check - Ok".to_string(),
    })
}
