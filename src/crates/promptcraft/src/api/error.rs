//! API error types and HTTP response conversion
//!
//! Maps engine failures and request rejections onto HTTP status codes with a
//! JSON body of the form `{error, message, code}`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::EngineError;

/// API error response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Error type identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Error code for programmatic handling
    pub code: String,
}

impl ApiErrorResponse {
    /// Create a new API error response
    pub fn new(error: impl Into<String>, message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            code: code.into(),
        }
    }
}

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

/// Custom API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid request data
    #[error("{0}")]
    BadRequest(String),

    /// Well-formed JSON with the wrong shape
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    JsonError(String),

    /// The model gateway is not usable
    #[error("{0}")]
    ServiceUnavailable(String),

    /// The model call failed or returned unusable output
    #[error("{0}")]
    Upstream(String),

    /// Generated diagram rejected by policy
    #[error("{0}")]
    InvalidDiagram(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::JsonError(_) => StatusCode::BAD_REQUEST,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::InvalidDiagram(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Get the error code identifier
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::ValidationError(_) => "VALIDATION_ERROR",
            ApiError::JsonError(_) => "JSON_ERROR",
            ApiError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            ApiError::Upstream(_) => "UPSTREAM_ERROR",
            ApiError::InvalidDiagram(_) => "INVALID_DIAGRAM",
        }
    }

    /// Get the error type name
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BadRequest",
            ApiError::ValidationError(_) => "ValidationError",
            ApiError::JsonError(_) => "JsonError",
            ApiError::ServiceUnavailable(_) => "ServiceUnavailable",
            ApiError::Upstream(_) => "UpstreamError",
            ApiError::InvalidDiagram(_) => "InvalidDiagram",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ApiErrorResponse::new(self.error_type(), self.to_string(), self.code());

        tracing::error!("API Error: {:?}", body);

        (status, Json(body)).into_response()
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::NotInitialized { ref reason } => {
                tracing::warn!("Rejecting request, model client unavailable: {}", reason);
                ApiError::ServiceUnavailable(err.to_string())
            }
            EngineError::Upstream(_) => ApiError::Upstream(err.to_string()),
            EngineError::InvalidDiagram(_) => ApiError::InvalidDiagram(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => ApiError::ValidationError(e.body_text()),
            JsonRejection::JsonSyntaxError(e) => ApiError::JsonError(e.body_text()),
            other => ApiError::BadRequest(other.body_text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use llm::LlmError;

    #[test]
    fn test_bad_request_error() {
        let err = ApiError::BadRequest("Prompt is required".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "BAD_REQUEST");
        assert_eq!(err.to_string(), "Prompt is required");
    }

    #[test]
    fn test_validation_error() {
        let err = ApiError::ValidationError("missing field `prompt`".to_string());
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_not_initialized_maps_to_503() {
        let err: ApiError = EngineError::NotInitialized {
            reason: "no key".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.code(), "SERVICE_UNAVAILABLE");
        assert_eq!(err.to_string(), "Google Gemini client not initialized.");
    }

    #[test]
    fn test_upstream_maps_to_502_with_detail() {
        let err: ApiError = EngineError::Upstream(LlmError::ProviderError("boom".to_string())).into();
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.error_type(), "UpstreamError");
        assert_eq!(
            err.to_string(),
            "Failed to communicate with Google AI: Provider error: boom"
        );
    }

    #[test]
    fn test_invalid_diagram_maps_to_502() {
        let err: ApiError =
            EngineError::InvalidDiagram(vec![crate::engine::DiagramIssue::MissingHeader]).into();
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.code(), "INVALID_DIAGRAM");
        assert!(err.to_string().contains("graph TD;"));
    }
}
