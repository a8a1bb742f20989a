//! Prompt processing handlers

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use crate::api::{error::ApiResult, middleware::validate_prompt, routes::AppState};
use crate::models::{ProcessedResponse, PromptRequest};

/// Run the full pipeline for one prompt
///
/// POST /process
pub async fn process_prompt(
    State(app_state): State<AppState>,
    payload: Result<Json<PromptRequest>, JsonRejection>,
) -> ApiResult<Json<ProcessedResponse>> {
    let Json(request) = payload?;
    let response = app_state.pipeline.process(&request).await?;
    Ok(Json(response))
}

/// Gateway payload: a missing or null prompt is a bad request, not a shape error
#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    pub prompt: Option<String>,
}

/// Same as [`process_prompt`] but rejects a missing or blank prompt up front
///
/// POST /api/v1/enhance
pub async fn enhance(
    State(app_state): State<AppState>,
    payload: Result<Json<EnhanceRequest>, JsonRejection>,
) -> ApiResult<Json<ProcessedResponse>> {
    let Json(body) = payload?;
    let prompt = body.prompt.unwrap_or_default();
    validate_prompt(&prompt)?;

    let request = PromptRequest::new(prompt);
    let response = app_state.pipeline.process(&request).await?;
    tracing::info!(
        enhanced_len = response.enhanced_prompt.len(),
        diagram_len = response.architecture.code.len(),
        "Prompt processed"
    );
    Ok(Json(response))
}
