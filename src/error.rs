//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// This enum represents all possible errors that can occur in the application.
/// Each variant maps to a specific HTTP status code and error payload.
///
/// # Error Categories
///
/// - **Resource Errors**: Requested key id does not exist
/// - **Verification Errors**: Presented secret matches no active key
/// - **Validation Errors**: Request body could not be parsed
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Requested key id does not resolve to a stored record.
    ///
    /// Returns HTTP 404 Not Found. Raised by fetch and rotate; revoke is
    /// deliberately a no-op for unknown ids instead.
    #[error("Key not found")]
    KeyNotFound,

    /// Presented secret matches no record with active status.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Invalid API key")]
    InvalidKey,

    /// Request body is malformed (unparseable JSON or wrong field types).
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("Invalid request")]
    InvalidRequest(String),
}

/// Convert body-extraction failures into a structured 400 response.
///
/// Handlers extract `Result<Json<T>, JsonRejection>` and use `?`, so a
/// syntactically invalid body becomes an explicit error response rather
/// than an unhandled request failure. A well-formed body with missing
/// fields never reaches this path; serde defaults fill those in.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Status Code Mapping
///
/// - `KeyNotFound` → 404 Not Found, `{"error": "Key not found"}`
/// - `InvalidKey` → 401 Unauthorized, `{"valid": false}`
/// - `InvalidRequest` → 400 Bad Request, `{"error": "<detail>"}`
///
/// The 401 body intentionally mirrors the successful verification shape
/// (`valid` flag) rather than the `error` shape used elsewhere.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map each error variant to (HTTP status, JSON body)
        let (status, body) = match self {
            AppError::KeyNotFound => (
                StatusCode::NOT_FOUND,
                json!({ "error": self.to_string() }),
            ),
            AppError::InvalidKey => (StatusCode::UNAUTHORIZED, json!({ "valid": false })),
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, json!({ "error": msg }))
            }
        };

        // Return the response with status code and JSON body
        (status, Json(body)).into_response()
    }
}
