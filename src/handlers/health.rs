//! Health check endpoint for service monitoring.

use axum::Json;
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: &'static str,

    /// Service version
    pub version: &'static str,
}

/// Health check handler.
///
/// There is no backing database or other dependency to probe, so this is
/// a static liveness payload.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "1.0.0"
/// }
/// ```
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}
