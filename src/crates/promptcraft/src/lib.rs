//! Prompt enhancement and architecture generation service
//!
//! Takes a free-text product idea, asks a generative model to rewrite it as a
//! detailed prompt, then asks again for a Mermaid architecture diagram of the
//! rewritten prompt. The result is returned together with a fixed quality
//! score and roadmap.
//!
//! The crate is split into:
//! - [`engine`] - model gateway, the two generation steps and the pipeline
//! - [`api`] - axum routes, handlers, error mapping and the collaboration relay
//! - [`config`] - TOML server configuration
//! - [`bootstrap`] - wiring configuration into application state

pub mod api;
pub mod bootstrap;
pub mod config;
pub mod engine;
pub mod models;
pub mod version;

pub use engine::{EngineError, ModelGateway, Pipeline};
pub use models::{ArchitectureResponse, ProcessedResponse, PromptRequest};
