//! prepchat_llms — conversation normalizer, request builder, response
//! interpreter, and the Bedrock provider behind them.
//!
//! The normalizer/builder/interpreter are pure functions over the session
//! history; all network state lives in the provider implementations.

pub mod error;
pub mod interpret;
pub mod normalize;
pub mod prompt;
pub mod provider;
pub mod providers;
pub mod request;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use interpret::{interpret, GUARDRAIL_REDIRECT};
pub use normalize::normalize;
pub use prompt::{augment_with_document, DOC_CONTEXT_CAP, STUDY_COACH_SYSTEM};
pub use provider::{GuardrailConfig, Provider, ProviderRegistry};
pub use providers::BedrockProvider;
pub use request::{build_request, MAX_OUTPUT_TOKENS};
pub use types::{ApiTurn, ContentPart, ModelOutcome, ModelRequest, ProviderResponse, ResponseContent};
