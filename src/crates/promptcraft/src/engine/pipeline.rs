//! Request pipeline
//!
//! Runs enhancement, then architecture generation on the enhanced prompt,
//! then assembles the response. The second model call depends on the first
//! and any failure aborts the whole request.

use crate::models::{ArchitectureResponse, ProcessedResponse, PromptRequest};

use super::architecture::generate_architecture;
use super::diagram::DiagramPolicy;
use super::enhance::enhance_prompt;
use super::gateway::ModelGateway;
use super::Result;

/// Quality score reported for every response. Not computed.
pub const QUALITY_SCORE: f64 = 0.9;

/// Notation label for generated diagrams
pub const DIAGRAM_TYPE: &str = "mermaid";

/// Roadmap attached to every response
pub const ROADMAP: [&str; 3] = ["Phase 1: MVP", "Phase 2: Add features", "Phase 3: Scale"];

/// Orchestrates the two generation steps for one prompt at a time.
#[derive(Debug, Clone)]
pub struct Pipeline {
    gateway: ModelGateway,
    diagram_policy: DiagramPolicy,
}

impl Pipeline {
    pub fn new(gateway: ModelGateway) -> Self {
        Self {
            gateway,
            diagram_policy: DiagramPolicy::default(),
        }
    }

    pub fn with_diagram_policy(mut self, policy: DiagramPolicy) -> Self {
        self.diagram_policy = policy;
        self
    }

    pub fn gateway(&self) -> &ModelGateway {
        &self.gateway
    }

    pub fn diagram_policy(&self) -> DiagramPolicy {
        self.diagram_policy
    }

    /// Process one prompt into the full response.
    pub async fn process(&self, request: &PromptRequest) -> Result<ProcessedResponse> {
        let original_prompt = request.prompt.clone();

        let enhanced_prompt = enhance_prompt(&self.gateway, &original_prompt).await?;
        let code = generate_architecture(&self.gateway, &enhanced_prompt).await?;
        let code = self.diagram_policy.apply(code)?;

        Ok(ProcessedResponse {
            original_prompt,
            enhanced_prompt,
            quality_score: QUALITY_SCORE,
            architecture: ArchitectureResponse {
                diagram_type: DIAGRAM_TYPE.to_string(),
                code,
            },
            roadmap: ROADMAP.iter().map(|s| s.to_string()).collect(),
        })
    }
}
