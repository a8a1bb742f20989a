//! Architecture generation step
//!
//! Produces Mermaid code for an enhanced prompt. The format rules in
//! [`ARCHITECTURE_INSTRUCTION`] are instructions to the model only; checking
//! the output is left to [`super::diagram`].

use super::gateway::ModelGateway;
use super::prompts::ARCHITECTURE_INSTRUCTION;
use super::Result;

pub async fn generate_architecture(gateway: &ModelGateway, enhanced_prompt: &str) -> Result<String> {
    tracing::info!("Calling Gemini to generate architecture for: {}", enhanced_prompt);
    gateway.call(ARCHITECTURE_INSTRUCTION, enhanced_prompt).await
}
