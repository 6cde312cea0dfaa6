//! Error types for the LLM layer.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// No API key configured for the named provider.
    #[error("missing API key for provider '{0}'")]
    MissingApiKey(String),

    /// Provider id not present in the registry.
    #[error("provider not found: {0}")]
    ProviderNotFound(String),

    /// The guardrail configuration was rejected by the service. The driver
    /// retries once on the unfiltered path when it sees this.
    #[error("guardrail unavailable: {0}")]
    GuardrailUnavailable(String),

    /// Non-success status from the model endpoint.
    #[error("model API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response parsed but did not carry what we need.
    #[error("invalid model response: {0}")]
    InvalidResponse(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Error::InvalidResponse(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = Error::Api {
            status: 403,
            message: "forbidden".to_string(),
        };
        assert_eq!(err.to_string(), "model API error 403: forbidden");
    }

    #[test]
    fn test_guardrail_unavailable_display() {
        let err = Error::GuardrailUnavailable("no such guardrail".to_string());
        assert!(err.to_string().starts_with("guardrail unavailable"));
    }
}
