//! Scope catalog endpoint.

use axum::Json;
use serde::Serialize;

use crate::models::scope::{SCOPE_CATALOG, Scope};

/// Response body for `GET /api/scopes`.
#[derive(Debug, Serialize)]
pub struct ScopeCatalogResponse {
    pub scopes: &'static [Scope],
}

/// Return the static catalog of known scopes.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "scopes": [
///     { "id": "read", "name": "Read", "description": "Read access to resources" },
///     ...
///   ]
/// }
/// ```
///
/// Purely informational; keys may carry scopes outside this list.
pub async fn list_scopes() -> Json<ScopeCatalogResponse> {
    Json(ScopeCatalogResponse {
        scopes: &SCOPE_CATALOG,
    })
}
