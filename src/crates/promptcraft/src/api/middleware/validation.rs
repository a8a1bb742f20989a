//! Request validation helpers

use crate::api::error::{ApiError, ApiResult};

/// Reject a blank prompt before any model call is made.
pub fn validate_prompt(prompt: &str) -> ApiResult<()> {
    if prompt.trim().is_empty() {
        return Err(ApiError::BadRequest("Prompt is required".to_string()));
    }
    Ok(())
}
