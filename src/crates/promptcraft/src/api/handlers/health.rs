//! Health check endpoint handler

use axum::{extract::State, response::IntoResponse, Json};

use crate::api::routes::AppState;
use crate::models::HealthResponse;

/// Handler for GET /health
///
/// Always answers 200; a missing model client shows up as `"status": "degraded"`.
pub async fn health(State(app_state): State<AppState>) -> impl IntoResponse {
    let model = app_state.pipeline.gateway().model_name().map(str::to_string);
    Json(HealthResponse::new(model, app_state.collab.connected_clients()))
}
