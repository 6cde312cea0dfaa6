//! Amazon Bedrock runtime provider (Anthropic messages wire format).

mod convert;
mod provider;
mod types;

pub use provider::BedrockProvider;
pub use types::BedrockConfig;
