#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use devtools_starter::{
    api::routes::create_router,
    config::Config,
    random::FixedEntropy,
    AppState,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::util::ServiceExt;

/// Router with no artificial delay and a pinned random source.
pub fn test_app(unit: f64) -> Router {
    test_app_with_delay(unit, 0)
}

pub fn test_app_with_delay(unit: f64, delay_ms: u64) -> Router {
    let config = Config::from_lookup(|key| (key == "GENERATE_DELAY_MS").then(|| delay_ms.to_string()))
        .expect("test config");
    create_router(AppState::with_entropy(config, Arc::new(FixedEntropy(unit))))
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_raw(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("user-agent", "integration-test")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}
