//! Model gateway
//!
//! Wraps the injected [`TextModel`] and owns the prompt framing and output
//! trimming shared by both generation steps.

use std::sync::Arc;

use llm::TextModel;

use super::{EngineError, Result};

#[derive(Clone)]
enum GatewayState {
    Ready(Arc<dyn TextModel>),
    Uninitialized(String),
}

/// Handle to the external generative model.
///
/// Built once at startup and shared read-only across requests.
#[derive(Clone)]
pub struct ModelGateway {
    state: GatewayState,
}

impl std::fmt::Debug for ModelGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.state {
            GatewayState::Ready(model) => f
                .debug_struct("ModelGateway")
                .field("model", &model.model_name())
                .finish(),
            GatewayState::Uninitialized(reason) => f
                .debug_struct("ModelGateway")
                .field("uninitialized", reason)
                .finish(),
        }
    }
}

impl ModelGateway {
    /// Gateway backed by a working model client
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self {
            state: GatewayState::Ready(model),
        }
    }

    /// Gateway whose client could not be built; every call fails.
    pub fn uninitialized(reason: impl Into<String>) -> Self {
        Self {
            state: GatewayState::Uninitialized(reason.into()),
        }
    }

    /// Whether calls can reach a model.
    pub fn is_ready(&self) -> bool {
        matches!(self.state, GatewayState::Ready(_))
    }

    /// Model identifier of the ready client, for health reporting.
    pub fn model_name(&self) -> Option<&str> {
        match &self.state {
            GatewayState::Ready(model) => Some(model.model_name()),
            GatewayState::Uninitialized(_) => None,
        }
    }

    /// Frame an instruction and the user's text as one prompt.
    pub fn compose(instruction: &str, user_text: &str) -> String {
        format!("{}\n\nUser Idea: '{}'", instruction, user_text)
    }

    /// Send one framed prompt and return the trimmed response text.
    pub async fn call(&self, instruction: &str, user_text: &str) -> Result<String> {
        let model = match &self.state {
            GatewayState::Ready(model) => model,
            GatewayState::Uninitialized(reason) => {
                return Err(EngineError::NotInitialized {
                    reason: reason.clone(),
                })
            }
        };

        let prompt = Self::compose(instruction, user_text);
        match model.generate(&prompt).await {
            Ok(text) => Ok(text.trim().to_string()),
            Err(e) => {
                if e.is_auth_error() {
                    tracing::error!("Gemini rejected the configured credentials: {}", e);
                } else {
                    tracing::error!("Google Gemini API call failed: {}", e);
                }
                Err(EngineError::Upstream(e))
            }
        }
    }
}
