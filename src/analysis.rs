//! Simulated analysis of client-reported data.
//!
//! The metrics are random and the recommendations are canned; nothing is
//! derived from the payload.

use serde::Serialize;
use serde_json::Value;

use crate::random::Entropy;

pub const RECOMMENDATIONS: [&str; 3] = [
    "Consider implementing caching for better performance",
    "Add error boundaries to React components",
    "Enable Chrome DevTools React profiler",
];

const SERVER_RESPONSE_CEILING_MS: f64 = 100.0;
const PROCESSING_CEILING_MS: f64 = 50.0;

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServerTiming {
    pub server_response_time: f64,
    pub processing_time: f64,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct RequestMetrics {
    pub performance: ServerTiming,
    pub browser: Option<String>,
    pub method: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct AnalysisResult {
    pub timestamp: String,
    pub received: Value,
    pub metrics: RequestMetrics,
    pub recommendations: Vec<&'static str>,
}

/// Request details the analysis reports back alongside the echo.
pub struct RequestInfo<'a> {
    pub method: &'a str,
    pub user_agent: Option<&'a str>,
}

pub fn analyze(received: Value, request: RequestInfo<'_>, entropy: &dyn Entropy, timestamp: String) -> AnalysisResult {
    AnalysisResult {
        timestamp,
        received,
        metrics: RequestMetrics {
            performance: ServerTiming {
                server_response_time: entropy.unit() * SERVER_RESPONSE_CEILING_MS,
                processing_time: entropy.unit() * PROCESSING_CEILING_MS,
            },
            browser: request.user_agent.map(str::to_string),
            method: request.method.to_string(),
        },
        recommendations: RECOMMENDATIONS.to_vec(),
    }
}
