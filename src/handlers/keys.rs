//! Key management HTTP handlers.
//!
//! This module implements the key-related API endpoints:
//! - GET /api/keys - List all keys
//! - POST /api/keys - Create a new key
//! - GET /api/keys/{id} - Fetch one key by id
//! - DELETE /api/keys/{id} - Revoke a key (idempotent)
//! - POST /api/keys/{id}/rotate - Replace a key's secret

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::{
    error::AppError,
    models::api_key::{
        ApiKey, CreateKeyRequest, KeyActionResponse, KeyListResponse, KeyResponse, RevokeResponse,
    },
    store::SharedStore,
};

/// List all keys in insertion order.
///
/// # Endpoint
///
/// `GET /api/keys`
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "keys": [ { "id": "key_abc12345", "name": "Production API", ... } ]
/// }
/// ```
///
/// Revoked keys are included; records are never removed from the store.
/// Note that the full secret is part of each record.
pub async fn list_keys(State(store): State<SharedStore>) -> Json<KeyListResponse> {
    let keys = store.read().list();
    Json(KeyListResponse { keys })
}

/// Create a new key.
///
/// # Endpoint
///
/// `POST /api/keys`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Deploy bot",       // optional, defaults to "Untitled Key"
///   "environment": "ci",        // optional, defaults to "live"
///   "scopes": ["deploy"],       // optional, defaults to ["read"]
///   "rateLimit": 5000,          // optional, defaults to 1000
///   "expiresAt": null           // optional
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: `{"success": true, "key": {...}}` with the
///   plaintext secret. Creation always succeeds for a parseable body.
/// - **Error (400)**: Body is not valid JSON or a field has the wrong type.
pub async fn create_key(
    State(store): State<SharedStore>,
    body: Result<Json<CreateKeyRequest>, JsonRejection>,
) -> Result<Json<KeyActionResponse>, AppError> {
    let Json(request) = body?;

    let key = ApiKey::issue(request);
    tracing::info!(id = %key.id, prefix = %key.prefix, "key created");

    store.write().insert(key.clone());

    Ok(Json(KeyActionResponse { success: true, key }))
}

/// Fetch a specific key by id.
///
/// # Endpoint
///
/// `GET /api/keys/{id}`
///
/// # Response
///
/// - **Success (200 OK)**: `{"key": {...}}` including the full secret;
///   this is what the dashboard's copy button relies on.
/// - **Error (404)**: `{"error": "Key not found"}`
pub async fn get_key(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<KeyResponse>, AppError> {
    let key = store.read().get(&id).cloned().ok_or(AppError::KeyNotFound)?;
    Ok(Json(KeyResponse { key }))
}

/// Revoke a key by id.
///
/// # Endpoint
///
/// `DELETE /api/keys/{id}`
///
/// # Response (200 OK)
///
/// `{"success": true}` whether or not the id existed, so repeated revokes
/// are safe. Revocation is a soft delete: the record stays in the store
/// with status "revoked" and can never return to active.
pub async fn revoke_key(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Json<RevokeResponse> {
    if let Some(key) = store.write().get_mut(&id) {
        key.revoke();
        tracing::info!(id = %id, "key revoked");
    }

    Json(RevokeResponse { success: true })
}

/// Rotate a key's secret.
///
/// # Endpoint
///
/// `POST /api/keys/{id}/rotate`
///
/// # Response
///
/// - **Success (200 OK)**: `{"success": true, "key": {...}}` with the new
///   plaintext secret. Id, name, scopes, and status are untouched, so
///   rotating a revoked key leaves it revoked.
/// - **Error (404)**: `{"error": "Key not found"}`
pub async fn rotate_key(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<KeyActionResponse>, AppError> {
    let mut keys = store.write();
    let key = keys.get_mut(&id).ok_or(AppError::KeyNotFound)?;

    key.rotate_secret();
    tracing::info!(id = %id, "key rotated");

    let key = key.clone();
    Ok(Json(KeyActionResponse { success: true, key }))
}
