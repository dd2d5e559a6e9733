//! API key record and the request/response types for key endpoints.
//!
//! A key record is the sole entity of this service. The secret (`key`) is
//! stored in plaintext because the API contract returns it on creation,
//! rotation, and fetch-by-id; verification compares the presented secret
//! against the stored value directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::keygen;

/// Lifecycle status of a key.
///
/// Only the `active` → `revoked` transition is ever performed. `expired`
/// exists in the wire format for forward compatibility but is never set;
/// `expiresAt` is stored without being enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyStatus {
    Active,
    Revoked,
    Expired,
}

/// Monotonic usage counters, bumped on every successful verification.
///
/// Despite the names, `lastHour` and `lastDay` are not windowed; no reset
/// ever happens. They count the same events as `requests`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyUsage {
    pub requests: u64,
    pub last_hour: u64,
    pub last_day: u64,
}

/// One issued credential with its secret, metadata, and usage counters.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "key_9f8a2b31",
///   "name": "Production API",
///   "key": "br_live_aB3xY9...",
///   "prefix": "br_live_",
///   "createdAt": "2026-01-15T10:00:00Z",
///   "lastUsed": null,
///   "expiresAt": null,
///   "status": "active",
///   "scopes": ["read", "write"],
///   "rateLimit": 1000,
///   "usage": { "requests": 0, "lastHour": 0, "lastDay": 0 }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    /// Unique identifier, immutable after creation
    pub id: String,

    /// Human-readable label
    pub name: String,

    /// Full secret value: prefix followed by 32 random characters
    pub key: String,

    /// Non-secret leading substring, `br_{environment}_`
    ///
    /// Kept alongside `key` so the dashboard can display the issuing
    /// environment without revealing the secret, and so rotation can
    /// regenerate the secret under the same prefix.
    pub prefix: String,

    /// Timestamp when this key was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last successful verification, null until then
    pub last_used: Option<DateTime<Utc>>,

    /// Requested expiry, stored but not enforced by any handler
    pub expires_at: Option<DateTime<Utc>>,

    /// Whether this key is currently valid for verification
    pub status: KeyStatus,

    /// Capability tags, free-form and not validated against the catalog
    pub scopes: Vec<String>,

    /// Requests-per-hour ceiling, stored but not enforced
    pub rate_limit: u32,

    /// Usage counters
    pub usage: KeyUsage,
}

impl ApiKey {
    /// Issue a new key from a create request.
    ///
    /// Generates the id and secret, stamps `createdAt`, and starts the key
    /// as active with zeroed usage.
    pub fn issue(request: CreateKeyRequest) -> Self {
        let prefix = format!("br_{}_", request.environment);
        Self {
            id: keygen::generate_id(),
            name: request.name,
            key: format!("{prefix}{}", keygen::generate_secret()),
            prefix,
            created_at: Utc::now(),
            last_used: None,
            expires_at: request.expires_at,
            status: KeyStatus::Active,
            scopes: request.scopes,
            rate_limit: request.rate_limit,
            usage: KeyUsage::default(),
        }
    }

    /// Soft-delete this key. Revoked keys fail verification but remain
    /// listed; there is no way back to active.
    pub fn revoke(&mut self) {
        self.status = KeyStatus::Revoked;
    }

    /// Replace the secret with a fresh one under the same prefix.
    ///
    /// Id, name, scopes, status, timestamps, and counters are untouched.
    pub fn rotate_secret(&mut self) {
        self.key = format!("{}{}", self.prefix, keygen::generate_secret());
    }

    /// Record one successful verification against this key.
    pub fn record_use(&mut self, now: DateTime<Utc>) {
        self.usage.requests += 1;
        self.usage.last_hour += 1;
        self.usage.last_day += 1;
        self.last_used = Some(now);
    }

    pub fn is_active(&self) -> bool {
        self.status == KeyStatus::Active
    }
}

/// Request body for creating a new key.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Deploy bot",
///   "environment": "ci",
///   "scopes": ["deploy"],
///   "rateLimit": 5000,
///   "expiresAt": "2026-12-31T00:00:00Z"
/// }
/// ```
///
/// Every field is optional; missing fields fall back to defaults rather
/// than being rejected. An empty JSON object is a valid request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateKeyRequest {
    /// Label for the new key (defaults to "Untitled Key")
    #[serde(default = "default_name")]
    pub name: String,

    /// Issuing environment, free text (defaults to "live")
    ///
    /// Becomes part of the prefix: `br_{environment}_`.
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Granted scopes (defaults to `["read"]`)
    #[serde(default = "default_scopes")]
    pub scopes: Vec<String>,

    /// Rate-limit ceiling in requests per hour (defaults to 1000)
    #[serde(default = "default_rate_limit")]
    pub rate_limit: u32,

    /// Optional expiry timestamp
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Default name when not specified in request.
fn default_name() -> String {
    "Untitled Key".to_string()
}

/// Default environment when not specified in request.
fn default_environment() -> String {
    "live".to_string()
}

/// Default scopes when not specified in request.
fn default_scopes() -> Vec<String> {
    vec!["read".to_string()]
}

/// Default rate limit when not specified in request.
fn default_rate_limit() -> u32 {
    1000
}

impl Default for CreateKeyRequest {
    fn default() -> Self {
        Self {
            name: default_name(),
            environment: default_environment(),
            scopes: default_scopes(),
            rate_limit: default_rate_limit(),
            expires_at: None,
        }
    }
}

/// Response body for `GET /api/keys`.
#[derive(Debug, Serialize)]
pub struct KeyListResponse {
    pub keys: Vec<ApiKey>,
}

/// Response body for `GET /api/keys/{id}`.
#[derive(Debug, Serialize)]
pub struct KeyResponse {
    pub key: ApiKey,
}

/// Response body for create and rotate, the two operations that hand the
/// caller a plaintext secret.
#[derive(Debug, Serialize)]
pub struct KeyActionResponse {
    pub success: bool,
    pub key: ApiKey,
}

/// Response body for `DELETE /api/keys/{id}`.
#[derive(Debug, Serialize)]
pub struct RevokeResponse {
    pub success: bool,
}
