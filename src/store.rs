//! In-memory key store.
//!
//! This module provides the process-wide storage for key records:
//! - An insertion-ordered map from key id to record
//! - A shared, lock-guarded handle passed to handlers via Axum state
//! - Explicit demo seeding for first boot
//!
//! There is intentionally no persistence; all records vanish when the
//! process exits.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use hashlink::LinkedHashMap;
use parking_lot::RwLock;

use crate::keygen;
use crate::models::api_key::{ApiKey, KeyStatus, KeyUsage};

/// Shared handle to the key store.
///
/// Handlers take the write lock for any read-modify-write sequence
/// (create, revoke, rotate, verify) and the read lock otherwise, which
/// keeps individual operations atomic with respect to each other. Guards
/// are never held across an await point.
pub type SharedStore = Arc<RwLock<KeyStore>>;

/// Create an empty shared store.
pub fn new_shared() -> SharedStore {
    Arc::new(RwLock::new(KeyStore::new()))
}

/// Insertion-ordered collection of key records, owned exclusively here.
///
/// Records are never removed; revocation only flips a status flag. List
/// order is insertion order, matching what clients observe.
#[derive(Debug, Default)]
pub struct KeyStore {
    keys: LinkedHashMap<String, ApiKey>,
}

impl KeyStore {
    pub fn new() -> Self {
        Self {
            keys: LinkedHashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// All records in insertion order, cloned out of the lock.
    pub fn list(&self) -> Vec<ApiKey> {
        self.keys.iter().map(|(_, key)| key.clone()).collect()
    }

    pub fn get(&self, id: &str) -> Option<&ApiKey> {
        self.keys.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut ApiKey> {
        self.keys.get_mut(id)
    }

    /// Insert a record under its own id.
    ///
    /// Ids are generated and effectively unique; an (unexpected) duplicate
    /// id would replace the earlier record.
    pub fn insert(&mut self, key: ApiKey) {
        self.keys.insert(key.id.clone(), key);
    }

    /// Find the record whose secret exactly matches `secret` and whose
    /// status is active.
    ///
    /// Linear in the number of stored keys, which is fine at this scale.
    /// A revoked key whose secret still matches textually is not returned.
    pub fn find_active_by_secret_mut(&mut self, secret: &str) -> Option<&mut ApiKey> {
        self.keys
            .iter_mut()
            .map(|(_, key)| key)
            .find(|key| key.key == secret && key.is_active())
    }

    /// Seed three illustrative records, only when the store is empty.
    ///
    /// Metadata and counters are fixed so the dashboard has something to
    /// show on a fresh boot; the secrets themselves are freshly generated
    /// each time.
    pub fn seed_demo_keys(&mut self) {
        if !self.is_empty() {
            return;
        }

        self.insert(ApiKey {
            id: "key_abc12345".to_string(),
            name: "Production API".to_string(),
            key: format!("br_live_{}", keygen::generate_secret()),
            prefix: "br_live_".to_string(),
            created_at: demo_timestamp("2026-01-15T10:00:00Z"),
            last_used: Some(demo_timestamp("2026-02-15T04:30:00Z")),
            expires_at: None,
            status: KeyStatus::Active,
            scopes: vec!["read".into(), "write".into(), "deploy".into()],
            rate_limit: 10000,
            usage: KeyUsage {
                requests: 145632,
                last_hour: 234,
                last_day: 4521,
            },
        });

        self.insert(ApiKey {
            id: "key_def67890".to_string(),
            name: "Development".to_string(),
            key: format!("br_test_{}", keygen::generate_secret()),
            prefix: "br_test_".to_string(),
            created_at: demo_timestamp("2026-02-01T14:30:00Z"),
            last_used: Some(demo_timestamp("2026-02-15T03:45:00Z")),
            expires_at: Some(demo_timestamp("2026-03-01T00:00:00Z")),
            status: KeyStatus::Active,
            scopes: vec!["read".into(), "write".into()],
            rate_limit: 1000,
            usage: KeyUsage {
                requests: 8934,
                last_hour: 45,
                last_day: 892,
            },
        });

        self.insert(ApiKey {
            id: "key_ghi11223".to_string(),
            name: "CI/CD Pipeline".to_string(),
            key: format!("br_ci_{}", keygen::generate_secret()),
            prefix: "br_ci_".to_string(),
            created_at: demo_timestamp("2026-02-10T09:00:00Z"),
            last_used: Some(demo_timestamp("2026-02-15T05:00:00Z")),
            expires_at: None,
            status: KeyStatus::Active,
            scopes: vec!["deploy".into(), "read".into()],
            rate_limit: 5000,
            usage: KeyUsage {
                requests: 2341,
                last_hour: 12,
                last_day: 156,
            },
        });
    }
}

/// Parse a fixed RFC 3339 literal used by the demo seed.
fn demo_timestamp(value: &str) -> DateTime<Utc> {
    value.parse().expect("demo timestamp is valid RFC 3339")
}
