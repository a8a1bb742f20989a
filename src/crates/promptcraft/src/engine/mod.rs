//! Generation engine
//!
//! Two model-backed steps run in sequence for every request:
//! 1. [`enhance::enhance_prompt`] rewrites the user's idea into a detailed prompt
//! 2. [`architecture::generate_architecture`] turns that prompt into Mermaid code
//!
//! Both go through a [`ModelGateway`], which is the only place that talks to
//! the external model. [`Pipeline`] sequences the steps and assembles the
//! response.

pub mod architecture;
pub mod diagram;
pub mod enhance;
pub mod gateway;
pub mod pipeline;
pub mod prompts;

pub use diagram::{check_mermaid, DiagramIssue, DiagramPolicy};
pub use gateway::ModelGateway;
pub use pipeline::{Pipeline, DIAGRAM_TYPE, QUALITY_SCORE, ROADMAP};

use thiserror::Error;

/// Errors produced while processing a prompt
#[derive(Debug, Error)]
pub enum EngineError {
    /// The model client was never constructed
    #[error("Google Gemini client not initialized.")]
    NotInitialized { reason: String },

    /// The model call failed
    #[error("Failed to communicate with Google AI: {0}")]
    Upstream(#[from] llm::LlmError),

    /// The model returned a diagram that breaks the Mermaid contract
    #[error("Generated diagram is not valid Mermaid: {}", format_issues(.0))]
    InvalidDiagram(Vec<DiagramIssue>),
}

fn format_issues(issues: &[DiagramIssue]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
