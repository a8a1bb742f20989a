//! Request and response records
//!
//! Transient values built once per request. Field names are part of the wire
//! contract and must not be renamed.

use serde::{Deserialize, Serialize};

/// Inbound payload: a single free-text idea.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptRequest {
    pub prompt: String,
}

impl PromptRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// Diagram text tagged with its notation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchitectureResponse {
    /// Diagram notation, always "mermaid"
    pub diagram_type: String,
    /// Raw diagram body returned by the model
    pub code: String,
}

/// Full result of processing one prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedResponse {
    pub original_prompt: String,
    pub enhanced_prompt: String,
    pub quality_score: f64,
    pub architecture: ArchitectureResponse,
    pub roadmap: Vec<String>,
}

/// Health report for `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "ok" when the model gateway is usable, "degraded" otherwise
    pub status: String,

    /// Configured model, if the gateway was initialized
    pub model: Option<String>,

    /// Whether generation requests can be served
    pub model_ready: bool,

    /// Open collaboration sockets
    pub connected_clients: usize,

    /// Service version
    pub version: String,

    /// Current timestamp
    pub timestamp: String,
}

impl HealthResponse {
    pub fn new(model: Option<String>, connected_clients: usize) -> Self {
        let model_ready = model.is_some();
        Self {
            status: if model_ready { "ok" } else { "degraded" }.to_string(),
            model,
            model_ready,
            connected_clients,
            version: crate::version::VERSION.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
