//! Integration tests for the Gravamen HTTP API.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use axum::http::StatusCode;
use axum_test::TestServer;
use gravamen::api::router;
use serde_json::{Value, json};

fn test_server() -> TestServer {
    TestServer::new(router()).expect("Failed to build test server")
}

// =============================================================================
// HEALTH
// =============================================================================

#[tokio::test]
async fn test_health() {
    let server = test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}

// =============================================================================
// CLASSIFY
// =============================================================================

#[tokio::test]
async fn test_classify_complete_draft() {
    let server = test_server();

    let response = server
        .post("/api/v1/classify")
        .json(&json!({
            "violation": "unlawful_detention",
            "scale": "severe",
            "frequency": "unknown"
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["severity"], "severe");
    assert!(body["missing"].as_array().unwrap().is_empty());
    let score = body["score"].as_f64().unwrap();
    assert!((score - 25.0 / 3.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_classify_boundary_draft() {
    let server = test_server();

    // base 8 + scale 4 + frequency 3 averages to exactly 5.0: Minor
    let response = server
        .post("/api/v1/classify")
        .json(&json!({
            "violation": "child_labor",
            "scale": "critical",
            "frequency": "frequently"
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["severity"], "minor");
}

#[tokio::test]
async fn test_classify_partial_draft_is_not_an_error() {
    let server = test_server();

    let response = server
        .post("/api/v1/classify")
        .json(&json!({ "violation": "torture" }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["severity"], Value::Null);
    assert_eq!(body["score"], Value::Null);
    assert_eq!(body["missing"], json!(["scale", "frequency"]));
}

#[tokio::test]
async fn test_classify_empty_draft() {
    let server = test_server();

    let response = server.post("/api/v1/classify").json(&json!({})).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["severity"], Value::Null);
    assert_eq!(body["missing"], json!(["violation", "scale", "frequency"]));
}

#[tokio::test]
async fn test_classify_unknown_token_is_unprocessable() {
    let server = test_server();

    let response = server
        .post("/api/v1/classify")
        .json(&json!({
            "violation": "grand_theft",
            "scale": "minor",
            "frequency": "one_time"
        }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("grand_theft"));
}

// =============================================================================
// WEIGHTS
// =============================================================================

#[tokio::test]
async fn test_weights_reference() {
    let server = test_server();

    let response = server.get("/api/v1/weights").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["violations"].as_array().unwrap().len(), 16);
    assert_eq!(body["scales"].as_array().unwrap().len(), 4);
    assert_eq!(body["frequencies"].as_array().unwrap().len(), 5);
    assert_eq!(body["thresholds"].as_array().unwrap().len(), 5);
    assert_eq!(body["violations"][0]["weight"], 100);
}
