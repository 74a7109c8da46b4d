//! Common test utilities for integration tests.
//!
//! Integration tests run the full router over a freshly seeded in-memory
//! catalog with latency simulation off and a deterministic gateway, so no
//! external services are involved.

// Allow dead code in this module - these are helper utilities that may not
// be used by all integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;

use domain::services::gateway::{NotificationGateway, StaticGateway};
use persistence::store::{CatalogStore, Latency};
use photo_portal_api::{app::create_app, config::Config};

/// Test configuration: latency simulation off, deterministic mock values.
pub fn test_config() -> Config {
    Config::load_for_test(&[]).expect("Failed to load test config")
}

/// App over a fresh catalog with a gateway that delivers every message.
pub fn create_test_app() -> Router {
    create_test_app_with_gateway(Arc::new(StaticGateway::delivering()))
}

/// App over a fresh catalog with the given gateway.
pub fn create_test_app_with_gateway(gateway: Arc<dyn NotificationGateway>) -> Router {
    let catalog = Arc::new(CatalogStore::seed(Latency::disabled()));
    create_app(test_config(), catalog, gateway)
}

/// Build a GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Build a request with a JSON body.
pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// Build a POST request with an empty body.
pub fn empty_post_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Read a response body as JSON.
pub async fn parse_response_body(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Response body was not valid JSON")
}
