//! Shared helpers for HTTP integration tests

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use hypermodern_stack::{app, AppState, ServerConfig};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

pub fn test_router() -> Router {
    test_router_with(ServerConfig::default())
}

pub fn test_router_with(config: ServerConfig) -> Router {
    let state = Arc::new(AppState::from_config(&config));
    app(state, &config)
}

/// Send a request and decode the JSON response body
pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

pub async fn post_json(router: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    post_raw(router, uri, serde_json::to_vec(body).unwrap()).await
}

pub async fn post_raw(router: Router, uri: &str, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();
    send(router, request).await
}
