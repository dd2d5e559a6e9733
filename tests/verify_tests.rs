//! Integration tests for key verification.

mod helpers;

use chrono::{DateTime, Utc};
use helpers::{create_key, fetch_key, spawn_seeded_server, spawn_server};
use serde_json::{Value, json};

async fn verify(server: &helpers::TestServer, secret: &str) -> reqwest::Response {
    server
        .client
        .post(server.url("/api/verify"))
        .json(&json!({"key": secret}))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn verify_active_secret_reports_scopes_and_rate_limit() {
    let server = spawn_server().await;

    let created = create_key(&server, json!({"scopes": ["read", "deploy"], "rateLimit": 250})).await;
    let secret = created["key"]["key"].as_str().unwrap();

    let resp = verify(&server, secret).await;
    assert!(resp.status().is_success());
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["valid"], true);
    assert_eq!(body["scopes"], json!(["read", "deploy"]));
    assert_eq!(body["rateLimit"], 250);
}

#[tokio::test]
async fn verify_increments_usage_and_advances_last_used() {
    let server = spawn_server().await;

    let created = create_key(&server, json!({})).await;
    let id = created["key"]["id"].as_str().unwrap();
    let secret = created["key"]["key"].as_str().unwrap();

    verify(&server, secret).await;
    let first = fetch_key(&server, id).await;
    assert_eq!(first["usage"], json!({"requests": 1, "lastHour": 1, "lastDay": 1}));
    let first_used: DateTime<Utc> = first["lastUsed"].as_str().unwrap().parse().unwrap();

    verify(&server, secret).await;
    let second = fetch_key(&server, id).await;
    assert_eq!(second["usage"]["requests"], 2);
    let second_used: DateTime<Utc> = second["lastUsed"].as_str().unwrap().parse().unwrap();
    assert!(second_used >= first_used);
}

#[tokio::test]
async fn verify_unknown_secret_returns_401_and_mutates_nothing() {
    let server = spawn_seeded_server().await;

    let resp = verify(&server, "br_live_00000000000000000000000000000000").await;
    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"valid": false}));

    // Seeded counters are untouched
    let seeded = fetch_key(&server, "key_abc12345").await;
    assert_eq!(seeded["usage"]["requests"], 145632);
}

#[tokio::test]
async fn verify_revoked_secret_fails_even_though_it_matches() {
    let server = spawn_server().await;

    let created = create_key(&server, json!({})).await;
    let id = created["key"]["id"].as_str().unwrap();
    let secret = created["key"]["key"].as_str().unwrap();

    server
        .client
        .delete(server.url(&format!("/api/keys/{id}")))
        .send()
        .await
        .unwrap();

    let resp = verify(&server, secret).await;
    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"valid": false}));

    // Failed verification leaves the record untouched
    let fetched = fetch_key(&server, id).await;
    assert_eq!(fetched["usage"]["requests"], 0);
    assert!(fetched["lastUsed"].is_null());
}

#[tokio::test]
async fn rotated_key_verifies_with_new_secret_only() {
    let server = spawn_server().await;

    let created = create_key(&server, json!({})).await;
    let id = created["key"]["id"].as_str().unwrap();
    let old_secret = created["key"]["key"].as_str().unwrap();

    let resp = server
        .client
        .post(server.url(&format!("/api/keys/{id}/rotate")))
        .send()
        .await
        .unwrap();
    let rotated: Value = resp.json().await.unwrap();
    let new_secret = rotated["key"]["key"].as_str().unwrap();

    assert_eq!(verify(&server, old_secret).await.status(), 401);
    assert!(verify(&server, new_secret).await.status().is_success());
}

#[tokio::test]
async fn malformed_verify_body_returns_400() {
    let server = spawn_server().await;

    // Missing required "key" field
    let resp = server
        .client
        .post(server.url("/api/verify"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn create_verify_revoke_verify_lifecycle() {
    let server = spawn_server().await;

    // Create a key in the test environment
    let created = create_key(&server, json!({"name": "Test", "environment": "test"})).await;
    let key = &created["key"];
    let id = key["id"].as_str().unwrap();
    let secret = key["key"].as_str().unwrap();
    assert_eq!(key["prefix"], "br_test_");
    assert!(secret.starts_with("br_test_"));

    // Verify the fresh secret
    let resp = verify(&server, secret).await;
    assert!(resp.status().is_success());
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["valid"], true);
    assert_eq!(body["scopes"], json!(["read"]));
    assert_eq!(body["rateLimit"], 1000);

    // Revoke it
    let resp = server
        .client
        .delete(server.url(&format!("/api/keys/{id}")))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"success": true}));

    // The same secret no longer verifies
    let resp = verify(&server, secret).await;
    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"valid": false}));
}
