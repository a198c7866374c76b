//! Integration Tests for API Endpoints
//!
//! Drives the full router through request/response cycles.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use expiring_cache::{api::create_router, spawn_reaper, AppState, ExpiringStore};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> (Router, Arc<ExpiringStore>) {
    let store = Arc::new(ExpiringStore::new());
    (create_router(AppState::new(store.clone())), store)
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

// == PUT Endpoint Tests ==

#[tokio::test]
async fn test_put_endpoint_success() {
    let (app, store) = create_test_app();

    let (status, json) = send(&app, "POST", "/cache/put?key=employee:201&value=Frank&ttl=5000").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["key"], "employee:201");
    assert!(json["message"].as_str().unwrap().contains("employee:201"));
    assert_eq!(store.get("employee:201").as_deref(), Some("Frank"));
}

#[tokio::test]
async fn test_put_endpoint_rejects_invalid_input() {
    let (app, store) = create_test_app();

    for uri in [
        "/cache/put?value=Data&ttl=5000",
        "/cache/put?key=&value=Data&ttl=5000",
        "/cache/put?key=invalid&ttl=5000",
        "/cache/put?key=invalid&value=Data",
        "/cache/put?key=invalid&value=Data&ttl=0",
        "/cache/put?key=invalid&value=Data&ttl=-100",
        "/cache/put?key=invalid&value=Data&ttl=abc",
        "/cache/put?key=invalid&value=Data&ttl=",
    ] {
        let (status, json) = send(&app, "POST", uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {}", uri);
        assert!(json["error"].is_string(), "uri: {}", uri);
    }

    assert!(store.is_empty());
}

#[tokio::test]
async fn test_put_invalid_ttl_keeps_prior_value() {
    let (app, _store) = create_test_app();

    send(&app, "POST", "/cache/put?key=k&value=old&ttl=5000").await;
    let (status, _) = send(&app, "POST", "/cache/put?key=k&value=new&ttl=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, json) = send(&app, "GET", "/cache/get?key=k").await;
    assert_eq!(json["value"], "old");
}

// == GET Endpoint Tests ==

#[tokio::test]
async fn test_get_endpoint_success() {
    let (app, _store) = create_test_app();

    send(&app, "POST", "/cache/put?key=employee:202&value=Grace&ttl=5000").await;
    let (status, json) = send(&app, "GET", "/cache/get?key=employee:202").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["key"], "employee:202");
    assert_eq!(json["value"], "Grace");
}

#[tokio::test]
async fn test_get_endpoint_expired_is_null() {
    let (app, _store) = create_test_app();

    send(&app, "POST", "/cache/put?key=employee:203&value=Ivan&ttl=50").await;
    tokio::time::sleep(Duration::from_millis(120)).await;

    let (status, json) = send(&app, "GET", "/cache/get?key=employee:203").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["value"].is_null());
}

#[tokio::test]
async fn test_get_endpoint_missing_key_param() {
    let (app, _store) = create_test_app();

    let (status, json) = send(&app, "GET", "/cache/get").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["value"].is_null());
}

// == DELETE Endpoint Tests ==

#[tokio::test]
async fn test_delete_endpoint_success() {
    let (app, _store) = create_test_app();

    send(&app, "POST", "/cache/put?key=employee:204&value=Heidi&ttl=5000").await;
    let (status, _) = send(&app, "DELETE", "/cache/delete?key=employee:204").await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = send(&app, "GET", "/cache/get?key=employee:204").await;
    assert!(json["value"].is_null());
}

#[tokio::test]
async fn test_delete_endpoint_missing_key_is_ok() {
    let (app, _store) = create_test_app();

    let (first, _) = send(&app, "DELETE", "/cache/delete?key=nonexistent").await;
    let (second, _) = send(&app, "DELETE", "/cache/delete?key=nonexistent").await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);
}

// == STATS / HEALTH Endpoint Tests ==

#[tokio::test]
async fn test_stats_endpoint() {
    let (app, _store) = create_test_app();

    send(&app, "POST", "/cache/put?key=stats_key&value=v&ttl=5000").await;
    send(&app, "GET", "/cache/get?key=stats_key").await;
    send(&app, "GET", "/cache/get?key=nonexistent").await;

    let (status, json) = send(&app, "GET", "/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hits"], 1);
    assert_eq!(json["misses"], 1);
    assert_eq!(json["total_entries"], 1);
    assert_eq!(json["hit_rate"], 0.5);
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _store) = create_test_app();

    let (status, json) = send(&app, "GET", "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}

// == Reaper Through The API ==

#[tokio::test]
async fn test_reaper_evicts_behind_the_api() {
    let (app, store) = create_test_app();
    let reaper = spawn_reaper(store.clone(), Duration::from_millis(50));

    send(&app, "POST", "/cache/put?key=employee:104&value=David&ttl=50").await;
    send(&app, "POST", "/cache/put?key=employee:105&value=Eve&ttl=3000").await;
    tokio::time::sleep(Duration::from_millis(200)).await;

    // Reaped before any read touched it
    assert_eq!(store.len(), 1);

    let (_, json) = send(&app, "GET", "/cache/get?key=employee:105").await;
    assert_eq!(json["value"], "Eve");

    let (_, stats) = send(&app, "GET", "/stats").await;
    assert_eq!(stats["reaped"], 1);
    assert_eq!(stats["expired_on_read"], 0);

    reaper.shutdown().await;
}
