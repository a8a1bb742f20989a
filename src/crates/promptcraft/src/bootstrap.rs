//! Startup wiring
//!
//! Builds the model gateway and application state from [`ServerConfig`].
//! A missing API key or a client that fails to build leaves the gateway
//! uninitialized instead of aborting startup.

use std::sync::Arc;

use llm::GeminiClient;

use crate::api::AppState;
use crate::config::{GeminiConfig, ServerConfig};
use crate::engine::{ModelGateway, Pipeline};

/// Construct the Gemini-backed gateway, or an uninitialized one on failure.
pub fn build_gateway(config: &GeminiConfig) -> ModelGateway {
    let client = config
        .remote_llm_config()
        .and_then(GeminiClient::new);

    match client {
        Ok(client) => {
            tracing::info!(model = %config.model, "Google Gemini client initialized");
            ModelGateway::new(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(
                "Error initializing Google Gemini client: {}. Requests will fail until it is configured.",
                e
            );
            ModelGateway::uninitialized(e.to_string())
        }
    }
}

/// Build the pipeline and shared state for the router.
pub fn build_state(config: &ServerConfig) -> AppState {
    let pipeline = Pipeline::new(build_gateway(&config.gemini)).with_diagram_policy(config.diagram.policy);
    AppState::new(pipeline)
}
