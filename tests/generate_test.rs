mod common;

use axum::http::StatusCode;
use devtools_starter::jokes::{MODEL_NAME, PROGRAMMING_JOKES, SUGGESTED_PROMPTS};
use serde_json::json;
use std::time::Duration;

use common::{get_json, post_raw, test_app, test_app_with_delay};

#[tokio::test]
async fn tell_me_a_joke() {
    let (status, body) = post_raw(test_app(0.3), "/api/ai/generate", r#"{"prompt":"tell me a joke"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["model"], "joke-generator-v1");
    assert_eq!(body["model"], MODEL_NAME);
    assert_eq!(body["prompt"], "tell me a joke");
    // 0.3 * 15 = 4.5, floored
    assert_eq!(body["response"], PROGRAMMING_JOKES[4]);
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn response_is_always_a_known_joke() {
    let prompts = [
        r#"{"prompt":"tell me a joke"}"#,
        r#"{"prompt":""}"#,
        r#"{"prompt":12}"#,
        r#"{"prompt":{"nested":[1,2]}}"#,
        r#"{}"#,
    ];
    let units = [0.0, 0.07, 0.42, 0.66, 0.999];

    for (prompt, unit) in prompts.iter().zip(units) {
        let (status, body) = post_raw(test_app(unit), "/api/ai/generate", prompt).await;
        assert_eq!(status, StatusCode::OK);
        let joke = body["response"].as_str().unwrap();
        assert!(PROGRAMMING_JOKES.contains(&joke), "unexpected joke {joke:?}");
    }
}

#[tokio::test]
async fn prompt_is_echoed_verbatim() {
    let (_, body) = post_raw(test_app(0.1), "/api/ai/generate", r#"{"prompt":{"nested":[1,2]}}"#).await;
    assert_eq!(body["prompt"], json!({"nested": [1, 2]}));

    let (_, body) = post_raw(test_app(0.1), "/api/ai/generate", r#"{"prompt":null}"#).await;
    assert!(body.get("prompt").unwrap().is_null());

    let (_, body) = post_raw(test_app(0.1), "/api/ai/generate", "{}").await;
    assert!(body.get("prompt").is_none());
}

#[tokio::test]
async fn malformed_body_is_a_server_error() {
    for raw in ["", "{", "prompt=joke", "null", "1e400"] {
        let (status, body) = post_raw(test_app(0.1), "/api/ai/generate", raw).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "body {raw:?}");
        assert_eq!(body["error"], "Failed to generate response");
        assert!(!body["message"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn non_object_json_gets_a_joke_without_prompt() {
    for raw in ["42", "\"tell me a joke\"", "[]", "[\"tell me a joke\"]", "true"] {
        let (status, body) = post_raw(test_app(0.5), "/api/ai/generate", raw).await;
        assert_eq!(status, StatusCode::OK, "body {raw:?}");
        assert_eq!(body["response"], PROGRAMMING_JOKES[7]);
        assert!(body.get("prompt").is_none(), "body {raw:?}");
    }
}

#[tokio::test(start_paused = true)]
async fn joke_waits_for_configured_delay() {
    let started = tokio::time::Instant::now();
    let (status, body) =
        post_raw(test_app_with_delay(0.1, 500), "/api/ai/generate", r#"{"prompt":"slow one"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["prompt"], "slow one");
    assert!(started.elapsed() >= Duration::from_millis(500));
}

#[tokio::test]
async fn descriptor_is_stable() {
    let (status, first) = get_json(test_app(0.2), "/api/ai/generate").await;
    let (_, second) = get_json(test_app(0.8), "/api/ai/generate").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, second);
    assert_eq!(first["endpoint"], "/api/ai/generate");
    assert_eq!(first["methods"], json!(["POST"]));
    assert_eq!(first["description"], "Generate AI responses (currently jokes)");
    assert_eq!(first["example"]["prompt"], SUGGESTED_PROMPTS[0]);
    assert_eq!(first["availablePrompts"], json!(SUGGESTED_PROMPTS));
}
