// src/server/routes.rs

//! Axum router configuration for the Larder service

use crate::server::handlers::{entries, names, recipes};
use crate::server::ServerState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};

/// Create the main application router
pub fn create_router(state: Arc<RwLock<ServerState>>) -> Router {
    // CORS configuration - permissive for now
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Handwritten-name normalization
        .route("/v1/names/parse", post(names::parse_name))
        // Entry registration
        .route("/v1/entries", post(entries::create_entry))
        // Recipe summary
        .route("/v1/recipes/:name/summary", get(recipes::get_summary))
        .with_state(state)
        .layer(cors)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
