//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Operates on the shared key store
//! 3. Returns HTTP response (JSON, status code)

/// Embedded dashboard document
pub mod dashboard;
/// Liveness endpoint
pub mod health;
/// Key management endpoints
pub mod keys;
/// Scope catalog endpoint
pub mod scopes;
/// Key verification endpoint
pub mod verify;
