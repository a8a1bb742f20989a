//! Shared test doubles for the promptcraft integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use llm::{LlmError, TextModel};
use promptcraft::engine::prompts::ENHANCE_INSTRUCTION;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
enum Behavior {
    /// Return the prompt unchanged
    Echo,
    /// Fixed replies for the enhancement and architecture calls
    Routed { enhanced: String, diagram: String },
    /// Fail the Nth call (1-based), echo otherwise
    FailOn(usize),
}

/// Mock model that records every prompt it receives
#[derive(Clone)]
pub struct MockTextModel {
    behavior: Behavior,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockTextModel {
    fn with(behavior: Behavior) -> Self {
        Self {
            behavior,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn echo() -> Self {
        Self::with(Behavior::Echo)
    }

    pub fn routed(enhanced: impl Into<String>, diagram: impl Into<String>) -> Self {
        Self::with(Behavior::Routed {
            enhanced: enhanced.into(),
            diagram: diagram.into(),
        })
    }

    pub fn failing_on(call: usize) -> Self {
        Self::with(Behavior::FailOn(call))
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextModel for MockTextModel {
    async fn generate(&self, prompt: &str) -> llm::Result<String> {
        let call = {
            let mut prompts = self.prompts.lock().unwrap();
            prompts.push(prompt.to_string());
            prompts.len()
        };

        match &self.behavior {
            Behavior::Echo => Ok(prompt.to_string()),
            Behavior::Routed { enhanced, diagram } => {
                if prompt.starts_with(ENHANCE_INSTRUCTION) {
                    Ok(enhanced.clone())
                } else {
                    Ok(diagram.clone())
                }
            }
            Behavior::FailOn(n) if *n == call => Err(LlmError::ProviderError(format!(
                "Gemini API error 500 Internal Server Error: simulated failure on call {}",
                call
            ))),
            Behavior::FailOn(_) => Ok(prompt.to_string()),
        }
    }

    fn model_name(&self) -> &str {
        "mock-gemini"
    }
}
