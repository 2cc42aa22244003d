use serde::Serialize;
use serde_json::Value;

use crate::analysis::AnalysisResult;
use crate::error::{AppError, Result};

pub struct GenerateRequest {
    /// Any JSON value; only echoed back. An explicit `null` is kept.
    pub prompt: Option<Value>,
}

impl GenerateRequest {
    /// Accepts any JSON except `null`. `prompt` is only read from objects;
    /// arrays and scalars simply carry no prompt.
    pub fn parse(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| AppError::GenerateFailed(e.to_string()))?;
        if value.is_null() {
            return Err(AppError::GenerateFailed("request body is null".to_string()));
        }
        Ok(Self {
            prompt: value.get("prompt").cloned(),
        })
    }
}

#[derive(Serialize)]
pub struct JokeResponse {
    pub success: bool,
    pub response: &'static str,
    pub model: &'static str,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<Value>,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis: AnalysisResult,
    pub message: &'static str,
}

/// Body of the `GET` routes: what the endpoint accepts.
#[derive(Serialize)]
pub struct EndpointDescriptor {
    pub status: &'static str,
    pub endpoint: &'static str,
    pub methods: Vec<&'static str>,
    pub description: &'static str,
    pub example: Value,
    #[serde(rename = "availablePrompts", skip_serializing_if = "Option::is_none")]
    pub available_prompts: Option<Vec<&'static str>>,
}
