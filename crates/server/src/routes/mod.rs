//! API route handlers
//!
//! This module contains all HTTP endpoint implementations for the zipfold
//! server. Routes are organized by functionality:
//!
//! - `health`: Health checks and readiness
//! - `ranges`: Range reduction (query string, path segment, JSON body)

pub mod health;
pub mod ranges;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Returns server information including version and available endpoints.
/// This is the root endpoint (GET /).
///
/// # Response
///
/// ```json
/// {
///   "name": "zipfold-server",
///   "version": "0.1.0",
///   "api_version": "v1",
///   "endpoints": ["..."]
/// }
/// ```
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "zipfold-server",
        "version": env!("CARGO_PKG_VERSION"),
        "api_version": "v1",
        "endpoints": [
            "/api/v1/ranges",
            "/api/v1/ranges/{ranges}",
            "/health",
            "/ready"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
