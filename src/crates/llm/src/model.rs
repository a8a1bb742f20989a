//! The text generation capability shared by all providers.

use crate::error::Result;
use async_trait::async_trait;

/// A model that turns one prompt string into one response string.
///
/// Implementations make a single attempt per call. Callers own any
/// post-processing of the returned text.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Generate a response for the full prompt text.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Identifier of the underlying model.
    fn model_name(&self) -> &str;
}
