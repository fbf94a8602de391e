// src/server/handlers/mod.rs

//! HTTP request handlers for the Larder service

pub mod entries;
pub mod names;
pub mod recipes;

use crate::error::Error;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Render a core rejection as an HTTP response
///
/// Every taxonomy error is a client error. A missing recipe on a summary
/// query renders as a lookup miss; internal defects are the only server
/// faults.
pub(crate) fn reject(err: &Error) -> Response {
    let status = match err {
        Error::UnknownRecipe(_) => StatusCode::NOT_FOUND,
        Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    };
    let body = serde_json::json!({
        "error": err.code(),
        "message": format!("{}", err),
    });
    (status, Json(body)).into_response()
}
