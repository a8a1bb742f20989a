//! Remote LLM provider implementations.
//!
//! These providers require an API key and talk to cloud-hosted endpoints.
//!
//! # Providers
//!
//! - **Gemini** - Google's Gemini models (Gemini 1.5 Flash, Gemini 1.5 Pro)

pub mod gemini;

pub use gemini::GeminiClient;
