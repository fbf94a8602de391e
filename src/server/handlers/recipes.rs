// src/server/handlers/recipes.rs

//! Recipe summary handler

use crate::resolver;
use crate::server::handlers::reject;
use crate::server::ServerState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Expand a recipe into base ingredients and total cook time
///
/// GET /v1/recipes/:name/summary
pub async fn get_summary(
    State(state): State<Arc<RwLock<ServerState>>>,
    Path(name): Path<String>,
) -> Response {
    let state = state.read().await;
    match resolver::summarize(&state.cookbook, &name) {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => {
            debug!("Summary for '{}' rejected: {}", name, e);
            reject(&e)
        }
    }
}
