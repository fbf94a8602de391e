// src/server/handlers/entries.rs

//! Entry registration handler

use crate::cookbook::EntryPayload;
use crate::server::handlers::reject;
use crate::server::ServerState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Register a cookbook entry
///
/// POST /v1/entries
pub async fn create_entry(
    State(state): State<Arc<RwLock<ServerState>>>,
    Json(payload): Json<EntryPayload>,
) -> Response {
    let mut state = state.write().await;
    match state.cookbook.register(&payload) {
        Ok(()) => {
            info!("Registered {} '{}'", payload.kind, payload.name);
            (StatusCode::OK, Json(serde_json::json!({}))).into_response()
        }
        Err(e) => {
            debug!("Rejected entry '{}': {}", payload.name, e);
            reject(&e)
        }
    }
}
