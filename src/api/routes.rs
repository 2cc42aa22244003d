use axum::{
    body::Bytes,
    extract::{Json, State},
    http::{header::USER_AGENT, HeaderMap, Method},
    routing::get,
    Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::analysis::{analyze, RequestInfo};
use crate::api::models::{AnalyzeResponse, EndpointDescriptor, GenerateRequest, JokeResponse};
use crate::error::{AppError, Result};
use crate::jokes::{pick_joke, MODEL_NAME, SUGGESTED_PROMPTS};
use crate::{iso_timestamp, AppState};

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/analyze", get(analyze_info).post(analyze_handler))
        .route("/api/ai/generate", get(generate_info).post(generate_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

// The body is read raw so that any parse failure, including a missing or
// wrong content type, ends up as a 500 rather than an extractor rejection.
async fn analyze_handler(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<AnalyzeResponse>> {
    let data: Value = serde_json::from_slice(&body)
        .map_err(|e| AppError::AnalyzeFailed(e.to_string()))?;

    tracing::info!(payload = %data, "Analysis request");

    let user_agent = headers.get(USER_AGENT).and_then(|v| v.to_str().ok());
    let analysis = analyze(
        data,
        RequestInfo {
            method: method.as_str(),
            user_agent,
        },
        state.entropy.as_ref(),
        iso_timestamp(Utc::now()),
    );

    Ok(Json(AnalyzeResponse {
        success: true,
        analysis,
        message: "Analysis completed successfully",
    }))
}

async fn analyze_info() -> Json<EndpointDescriptor> {
    Json(EndpointDescriptor {
        status: "ready",
        endpoint: "/api/analyze",
        methods: vec!["POST"],
        description: "Send performance data for analysis",
        example: json!({
            "performance": {
                "loadTime": 1234,
                "resources": 45,
            },
            "userAction": "page_load",
        }),
        available_prompts: None,
    })
}

async fn generate_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<JokeResponse>> {
    let req = GenerateRequest::parse(&body)?;

    tracing::info!(prompt = ?req.prompt, "AI generate request");

    let joke = pick_joke(state.entropy.as_ref());

    // Simulated thinking time
    tokio::time::sleep(state.config.generate_delay).await;

    tracing::debug!(joke, "Joke selected");

    Ok(Json(JokeResponse {
        success: true,
        response: joke,
        model: MODEL_NAME,
        timestamp: iso_timestamp(Utc::now()),
        prompt: req.prompt,
    }))
}

async fn generate_info() -> Json<EndpointDescriptor> {
    Json(EndpointDescriptor {
        status: "ready",
        endpoint: "/api/ai/generate",
        methods: vec!["POST"],
        description: "Generate AI responses (currently jokes)",
        example: json!({ "prompt": SUGGESTED_PROMPTS[0] }),
        available_prompts: Some(SUGGESTED_PROMPTS.to_vec()),
    })
}
