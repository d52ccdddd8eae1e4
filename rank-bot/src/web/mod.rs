//! Web server module for the Discord interactions endpoint.
//!
//! This module provides:
//! - The interactions route (method gate, signature check, dispatch)
//! - A health check for the hosting environment
//! - Response helpers matching Discord's expectations

pub mod handlers;
pub mod response;
pub mod signature;

use axum::{
    routing::{any, get},
    Router,
};
use tower_http::trace::TraceLayer;

pub use handlers::{health, interactions, AppState, HealthResponse};
pub use response::PrettyJson;
pub use signature::{verify_interaction_signature, SIGNATURE_HEADER, TIMESTAMP_HEADER};

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", any(interactions))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
