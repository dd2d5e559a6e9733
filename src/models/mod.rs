//! Data models for stored keys and API request/response types.

/// API key record and key endpoint request/response types
pub mod api_key;
/// Static scope catalog
pub mod scope;
