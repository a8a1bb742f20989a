//! CORS middleware configuration
//!
//! The web front end is served from a different origin, so every origin is allowed.

use tower_http::cors::CorsLayer;

pub fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
