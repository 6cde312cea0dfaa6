//! Bedrock runtime provider implementation.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::error::{Error, Result};
use crate::provider::{GuardrailConfig, Provider};
use crate::types::{ModelRequest, ProviderResponse};

use super::convert::{from_invoke_response, to_invoke_request};
use super::types::{BedrockConfig, InvokeErrorBody, InvokeResponse};

const GUARDRAIL_ID_HEADER: &str = "X-Amzn-Bedrock-GuardrailIdentifier";
const GUARDRAIL_VERSION_HEADER: &str = "X-Amzn-Bedrock-GuardrailVersion";
const TRACE_HEADER: &str = "X-Amzn-Bedrock-Trace";

/// Bedrock runtime HTTP provider.
pub struct BedrockProvider {
    config: BedrockConfig,
    client: Client,
}

impl BedrockProvider {
    /// Environment variable for the bearer token.
    pub const API_KEY_ENV: &'static str = "AWS_BEARER_TOKEN_BEDROCK";
    /// Environment variable for the region (default `us-east-1`).
    pub const REGION_ENV: &'static str = "AWS_REGION";
    /// Environment variable overriding the model id.
    pub const MODEL_ID_ENV: &'static str = "PREPCHAT_MODEL_ID";

    pub fn new(config: BedrockConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::MissingApiKey("bedrock".to_string()));
        }
        Ok(Self {
            config,
            client: Client::new(),
        })
    }

    /// Create provider from environment.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(Self::API_KEY_ENV)
            .map_err(|_| Error::MissingApiKey("bedrock".to_string()))?;
        let region =
            std::env::var(Self::REGION_ENV).unwrap_or_else(|_| "us-east-1".to_string());

        let mut config = BedrockConfig::new(api_key, region);
        if let Ok(model_id) = std::env::var(Self::MODEL_ID_ENV) {
            config = config.with_model_id(model_id);
        }
        Self::new(config)
    }

    /// Classify a non-success response. A 4xx whose service message names the
    /// guardrail configuration becomes the typed fallback signal instead of a
    /// plain API error.
    fn classify_error(
        status: StatusCode,
        body: &str,
        guardrail_requested: bool,
    ) -> Error {
        let message = serde_json::from_str::<InvokeErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| body.to_string());

        if guardrail_requested
            && status.is_client_error()
            && message.to_lowercase().contains("guardrail")
        {
            return Error::GuardrailUnavailable(message);
        }

        Error::Api {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl Provider for BedrockProvider {
    fn provider_id(&self) -> &str {
        "bedrock"
    }

    async fn generate(
        &self,
        request: &ModelRequest,
        guardrail: Option<&GuardrailConfig>,
    ) -> Result<ProviderResponse> {
        let url = format!(
            "{}/model/{}/invoke",
            self.config.base_url, self.config.model_id
        );
        let body = to_invoke_request(request);

        let mut builder = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&body);

        if let Some(g) = guardrail {
            builder = builder
                .header(GUARDRAIL_ID_HEADER, &g.identifier)
                .header(GUARDRAIL_VERSION_HEADER, &g.version)
                .header(TRACE_HEADER, "ENABLED");
        }

        debug!(
            model_id = %self.config.model_id,
            turns = request.turns.len(),
            guardrail = guardrail.is_some(),
            "invoking bedrock runtime"
        );

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Self::classify_error(status, &text, guardrail.is_some()));
        }

        let invoke_resp: InvokeResponse = response.json().await?;
        Ok(from_invoke_response(invoke_resp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_rejected() {
        let config = BedrockConfig::new("", "us-east-1");
        assert!(matches!(
            BedrockProvider::new(config),
            Err(Error::MissingApiKey(_))
        ));
    }

    #[test]
    fn test_classify_guardrail_rejection() {
        let body = r#"{"message":"Guardrail with identifier gr-123 not found"}"#;
        let err = BedrockProvider::classify_error(StatusCode::BAD_REQUEST, body, true);
        assert!(matches!(err, Error::GuardrailUnavailable(_)));
    }

    #[test]
    fn test_guardrail_message_without_request_is_plain_api_error() {
        // Only a filtered-path call can fall back; the direct path never
        // reinterprets the message.
        let body = r#"{"message":"Guardrail with identifier gr-123 not found"}"#;
        let err = BedrockProvider::classify_error(StatusCode::BAD_REQUEST, body, false);
        assert!(matches!(err, Error::Api { status: 400, .. }));
    }

    #[test]
    fn test_classify_server_error() {
        let err = BedrockProvider::classify_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "oops",
            true,
        );
        match err {
            Error::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "oops");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_default_base_url_from_region() {
        let config = BedrockConfig::new("key", "eu-west-1");
        assert_eq!(
            config.base_url,
            "https://bedrock-runtime.eu-west-1.amazonaws.com"
        );
    }
}
