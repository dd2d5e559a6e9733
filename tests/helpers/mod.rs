//! Shared helpers for integration tests.
//!
//! Each test spawns its own server on an ephemeral port with its own
//! store, so tests never share state.

use api_key_service::{app, store};
use serde_json::Value;

pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Spawn the service with an empty key store.
pub async fn spawn_server() -> TestServer {
    spawn_with_store(store::new_shared()).await
}

/// Spawn the service with the three demo keys seeded.
pub async fn spawn_seeded_server() -> TestServer {
    let store = store::new_shared();
    store.write().seed_demo_keys();
    spawn_with_store(store).await
}

async fn spawn_with_store(store: store::SharedStore) -> TestServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener address");

    let router = app(store);
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve test app");
    });

    TestServer {
        base_url: format!("http://{addr}"),
        client: reqwest::Client::new(),
    }
}

/// POST /api/keys and return the parsed response body.
pub async fn create_key(server: &TestServer, body: Value) -> Value {
    let resp = server
        .client
        .post(server.url("/api/keys"))
        .json(&body)
        .send()
        .await
        .expect("create request");
    assert!(resp.status().is_success());
    resp.json().await.expect("create response body")
}

/// GET /api/keys/{id} and return the key record.
pub async fn fetch_key(server: &TestServer, id: &str) -> Value {
    let resp = server
        .client
        .get(server.url(&format!("/api/keys/{id}")))
        .send()
        .await
        .expect("fetch request");
    assert!(resp.status().is_success());
    let body: Value = resp.json().await.expect("fetch response body");
    body["key"].clone()
}
