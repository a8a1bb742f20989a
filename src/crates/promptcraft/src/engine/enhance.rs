//! Prompt enhancement step

use super::gateway::ModelGateway;
use super::prompts::ENHANCE_INSTRUCTION;
use super::Result;

/// Rewrite a raw idea into a detailed prompt. The model output is returned as is.
pub async fn enhance_prompt(gateway: &ModelGateway, text: &str) -> Result<String> {
    tracing::info!("Calling Gemini to enhance prompt for: {}", text);
    gateway.call(ENHANCE_INSTRUCTION, text).await
}
