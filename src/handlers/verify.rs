//! Key verification endpoint.
//!
//! Verification is the one read path that also writes: a successful match
//! bumps the key's usage counters and `lastUsed` timestamp, so the whole
//! scan-and-increment runs under a single write-lock acquisition.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{error::AppError, store::SharedStore};

/// Request body for `POST /api/verify`.
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    /// The full secret as handed out at creation or rotation
    pub key: String,
}

/// Successful verification result.
///
/// The failure shape (`{"valid": false}`, HTTP 401) is produced by
/// [`AppError::InvalidKey`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    pub valid: bool,
    pub scopes: Vec<String>,
    pub rate_limit: u32,
}

/// Verify a presented secret against the stored keys.
///
/// # Endpoint
///
/// `POST /api/verify` with body `{"key": "br_live_..."}`
///
/// # Behavior
///
/// Scans all records for an exact secret match with active status. A
/// revoked key fails verification even though its secret still matches
/// textually. On success the key's usage counters are incremented and
/// `lastUsed` is set to now.
///
/// # Response
///
/// - **Success (200 OK)**: `{"valid": true, "scopes": [...], "rateLimit": 1000}`
/// - **Error (401)**: `{"valid": false}`
/// - **Error (400)**: Body is not valid JSON or `key` is missing.
///
/// The rate limit is reported, not enforced; callers are expected to apply
/// it themselves.
pub async fn verify_key(
    State(store): State<SharedStore>,
    body: Result<Json<VerifyRequest>, JsonRejection>,
) -> Result<Json<VerifyResponse>, AppError> {
    let Json(request) = body?;

    let mut keys = store.write();
    let Some(key) = keys.find_active_by_secret_mut(&request.key) else {
        // The secret itself is never logged
        tracing::debug!("verification failed: no active key matches");
        return Err(AppError::InvalidKey);
    };

    key.record_use(Utc::now());

    Ok(Json(VerifyResponse {
        valid: true,
        scopes: key.scopes.clone(),
        rate_limit: key.rate_limit,
    }))
}
