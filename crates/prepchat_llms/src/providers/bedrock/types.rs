//! Bedrock-specific wire types and configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the Bedrock runtime provider.
#[derive(Debug, Clone)]
pub struct BedrockConfig {
    /// Bearer token for the runtime HTTP API.
    pub api_key: String,
    /// AWS region the runtime endpoint lives in.
    pub region: String,
    /// Base URL (default derived from region).
    pub base_url: String,
    /// Model identifier, e.g. `anthropic.claude-3-sonnet-20240229-v1:0`.
    pub model_id: String,
}

impl BedrockConfig {
    pub const DEFAULT_MODEL_ID: &'static str = "anthropic.claude-3-sonnet-20240229-v1:0";

    pub fn new(api_key: impl Into<String>, region: impl Into<String>) -> Self {
        let region = region.into();
        let base_url = format!("https://bedrock-runtime.{region}.amazonaws.com");
        Self {
            api_key: api_key.into(),
            region,
            base_url,
            model_id: Self::DEFAULT_MODEL_ID.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut url = base_url.into();
        while url.ends_with('/') {
            url.pop();
        }
        self.base_url = url;
        self
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }
}

/// Anthropic messages request body as Bedrock `invoke` expects it.
#[derive(Debug, Serialize)]
pub struct InvokeRequest {
    pub anthropic_version: String,
    pub max_tokens: u32,
    pub system: String,
    pub messages: Vec<WireMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: String,
    pub content: Vec<WireContent>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WireContent {
    Text { text: String },
    Image { source: WireImageSource },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WireImageSource {
    #[serde(rename = "type")]
    pub source_type: String,
    pub media_type: String,
    pub data: String,
}

/// Response body from `invoke`.
#[derive(Debug, Deserialize)]
pub struct InvokeResponse {
    pub stop_reason: Option<String>,
    #[serde(default)]
    pub content: Vec<WireResponseContent>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WireResponseContent {
    Text { text: String },
    #[serde(other)]
    Unknown,
}

/// Error body the runtime returns on non-success statuses.
#[derive(Debug, Deserialize)]
pub struct InvokeErrorBody {
    pub message: Option<String>,
}
