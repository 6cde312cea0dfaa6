//! Unified request/response types shared by the normalizer, builder,
//! interpreter, and providers.

use prepchat_core::{MediaType, Role};
use serde::{Deserialize, Serialize};

/// One content part of an outgoing turn. Image data is already base64.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    Image { media_type: MediaType, data: String },
}

impl ContentPart {
    pub fn text(content: impl Into<String>) -> Self {
        ContentPart::Text {
            text: content.into(),
        }
    }

    pub fn image(media_type: MediaType, data: impl Into<String>) -> Self {
        ContentPart::Image {
            media_type,
            data: data.into(),
        }
    }
}

/// A turn as sent to the model provider, possibly holding multiple parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiTurn {
    pub role: Role,
    pub parts: Vec<ContentPart>,
}

impl ApiTurn {
    pub fn new(role: Role, parts: Vec<ContentPart>) -> Self {
        Self { role, parts }
    }

    pub fn text_turn(role: Role, text: impl Into<String>) -> Self {
        Self::new(role, vec![ContentPart::text(text)])
    }

    /// Concatenated text of every text part, `\n`-joined.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| match p {
                ContentPart::Text { text } => Some(text.as_str()),
                ContentPart::Image { .. } => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Fully assembled request for one model call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRequest {
    pub system: String,
    pub max_output_tokens: u32,
    pub turns: Vec<ApiTurn>,
}

/// What the provider handed back, reduced to what the interpreter needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderResponse {
    pub stop_reason: Option<String>,
    pub content: Vec<ResponseContent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseContent {
    Text { text: String },
}

/// Every model call resolves to one of these; none of them is an error the
/// driver has to unwind from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModelOutcome {
    Completed { text: String },
    Filtered { message: String },
    TransportError { message: String },
}

impl ModelOutcome {
    /// The text the driver displays as the assistant's reply.
    pub fn display_text(&self) -> &str {
        match self {
            ModelOutcome::Completed { text } => text,
            ModelOutcome::Filtered { message } => message,
            ModelOutcome::TransportError { message } => message,
        }
    }
}
