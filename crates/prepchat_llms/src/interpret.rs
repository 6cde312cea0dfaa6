//! Response interpreter: every provider result becomes a displayable
//! `ModelOutcome`. Nothing throws past this boundary.

use crate::error::{Error, Result};
use crate::types::{ModelOutcome, ProviderResponse, ResponseContent};

/// Stop reason Bedrock reports when the guardrail blocked the exchange.
pub const GUARDRAIL_INTERVENED: &str = "guardrail_intervened";

/// Fixed redirect shown instead of a filtered answer. Never exposes the
/// filter's internal reason.
pub const GUARDRAIL_REDIRECT: &str = "I apologize, but I cannot respond to that request. \
Please ask questions related to AWS AI Practitioner, Cloud Practitioner, or Scrum certifications.";

/// Map the raw provider result to an outcome. Pure and idempotent: the same
/// input always maps to the same outcome.
pub fn interpret(result: Result<ProviderResponse>) -> ModelOutcome {
    let response = match result {
        Ok(response) => response,
        Err(err) => {
            return ModelOutcome::TransportError {
                message: format!("Error: {err}"),
            };
        }
    };

    if response.stop_reason.as_deref() == Some(GUARDRAIL_INTERVENED) {
        return ModelOutcome::Filtered {
            message: GUARDRAIL_REDIRECT.to_string(),
        };
    }

    match response.content.iter().find_map(|c| match c {
        ResponseContent::Text { text } => Some(text.clone()),
    }) {
        Some(text) => ModelOutcome::Completed { text },
        None => ModelOutcome::TransportError {
            message: format!("Error: {}", Error::invalid_response("no text content block")),
        },
    }
}
