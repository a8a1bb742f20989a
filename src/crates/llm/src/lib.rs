//! Generative model providers for promptcraft.
//!
//! This crate exposes the [`TextModel`] capability, a single "text in, text
//! out" operation, together with the remote providers that implement it.
//!
//! # Remote Providers
//!
//! - **Gemini** - Google's Gemini models via the Generative Language API
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use llm::remote::GeminiClient;
//! use llm::config::RemoteLlmConfig;
//! use llm::TextModel;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RemoteLlmConfig::from_env(
//!         "GOOGLE_API_KEY",
//!         "https://generativelanguage.googleapis.com/v1beta",
//!         "gemini-1.5-flash-latest"
//!     )?;
//!     let client = GeminiClient::new(config)?;
//!
//!     let text = client.generate("Describe a todo app in one line").await?;
//!     println!("Response: {}", text);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod remote;

// Re-export commonly used types
pub use config::RemoteLlmConfig;
pub use error::{LlmError, Result};
pub use model::TextModel;
pub use remote::GeminiClient;
