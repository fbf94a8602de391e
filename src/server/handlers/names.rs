// src/server/handlers/names.rs

//! Handwritten-name normalization handler

use crate::name;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

/// Request body for name normalization
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    /// Raw handwritten name
    pub input: String,
}

/// Normalize a handwritten recipe name
///
/// POST /v1/names/parse
pub async fn parse_name(Json(request): Json<ParseRequest>) -> Response {
    match name::normalize(&request.input) {
        Some(msg) => (StatusCode::OK, Json(serde_json::json!({ "msg": msg }))).into_response(),
        None => {
            let body = serde_json::json!({
                "error": "invalid_name",
                "message": "name contains no letters after normalization",
            });
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        }
    }
}
