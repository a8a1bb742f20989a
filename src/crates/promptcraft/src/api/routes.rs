//! API route definitions
//!
//! Defines all API routes and their associated handler functions.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::{collab, handlers, middleware, CollabHub};
use crate::engine::Pipeline;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
    pub collab: Arc<CollabHub>,
}

impl AppState {
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            collab: Arc::new(CollabHub::default()),
        }
    }
}

/// Build the complete API router
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(handlers::health))
        // Prompt processing endpoints
        .route("/process", post(handlers::process_prompt))
        .route("/api/v1/enhance", post(handlers::enhance))
        // Collaboration relay
        .route("/ws", get(collab::ws_handler))
        .layer(middleware::logging_layer())
        .layer(middleware::cors_layer())
        .with_state(app_state)
}
