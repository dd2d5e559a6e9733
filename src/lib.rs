//! API Key Service - issue, manage, rotate, revoke, and verify API keys.
//!
//! This crate exposes a REST API for managing opaque bearer credentials.
//! Each key carries scopes, a rate-limit ceiling, and usage counters. All
//! state lives in process memory and is lost on restart by design.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Storage**: In-memory, insertion-ordered map behind a read-write lock
//! - **Format**: JSON requests/responses, plus an embedded HTML dashboard
//!
//! The router is built by [`app`] so that integration tests can serve the
//! exact same application the binary runs.

pub mod config;
pub mod error;
pub mod handlers;
pub mod keygen;
pub mod models;
pub mod store;

use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::store::SharedStore;

/// Build the application router.
///
/// # Routes
///
/// - `GET    /api/keys` - list all keys
/// - `POST   /api/keys` - create a key
/// - `GET    /api/keys/{id}` - fetch one key
/// - `DELETE /api/keys/{id}` - revoke a key (idempotent)
/// - `POST   /api/keys/{id}/rotate` - replace a key's secret
/// - `GET    /api/scopes` - static scope catalog
/// - `POST   /api/verify` - verify a presented secret
/// - `GET    /api/health` - liveness payload
/// - anything else - embedded dashboard document
///
/// # Cross-Origin Policy
///
/// Every response carries permissive CORS headers (any origin, methods
/// GET/POST/PUT/DELETE/OPTIONS, headers Content-Type/Authorization). The
/// CORS layer also answers preflight OPTIONS requests before they reach
/// any handler.
pub fn app(store: SharedStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        // Key management routes
        .route(
            "/api/keys",
            get(handlers::keys::list_keys).post(handlers::keys::create_key),
        )
        .route(
            "/api/keys/{id}",
            get(handlers::keys::get_key).delete(handlers::keys::revoke_key),
        )
        .route("/api/keys/{id}/rotate", post(handlers::keys::rotate_key))
        // Scope catalog
        .route("/api/scopes", get(handlers::scopes::list_scopes))
        // Key verification
        .route("/api/verify", post(handlers::verify::verify_key))
        // Liveness
        .route("/api/health", get(handlers::health::health_check))
        // Any other path serves the dashboard
        .fallback(handlers::dashboard::dashboard)
        .layer(cors)
        // Add distributed tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        // Share the key store with all handlers via State extraction
        .with_state(store)
}
