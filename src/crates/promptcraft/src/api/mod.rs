//! HTTP layer for the promptcraft service
//!
//! Provides:
//! - `POST /process` and `POST /api/v1/enhance` for prompt processing
//! - `GET /health` for liveness and model readiness
//! - `GET /ws` for the collaboration relay

pub mod collab;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use collab::CollabHub;
pub use error::{ApiError, ApiErrorResponse, ApiResult};
pub use routes::{create_router, AppState};
