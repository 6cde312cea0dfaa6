//! Conversion between unified types and Bedrock wire types.

use crate::types::{ContentPart, ModelRequest, ProviderResponse, ResponseContent};

use super::types::{
    InvokeRequest, InvokeResponse, WireContent, WireImageSource, WireMessage, WireResponseContent,
};

const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// Convert the unified request into the `invoke` body.
pub fn to_invoke_request(req: &ModelRequest) -> InvokeRequest {
    let messages = req
        .turns
        .iter()
        .map(|turn| WireMessage {
            role: turn.role.as_str().to_string(),
            content: turn.parts.iter().map(to_wire_content).collect(),
        })
        .collect();

    InvokeRequest {
        anthropic_version: ANTHROPIC_VERSION.to_string(),
        max_tokens: req.max_output_tokens,
        system: req.system.clone(),
        messages,
    }
}

fn to_wire_content(part: &ContentPart) -> WireContent {
    match part {
        ContentPart::Text { text } => WireContent::Text { text: text.clone() },
        ContentPart::Image { media_type, data } => WireContent::Image {
            source: WireImageSource {
                source_type: "base64".to_string(),
                media_type: media_type.as_mime().to_string(),
                data: data.clone(),
            },
        },
    }
}

/// Reduce the `invoke` response to what the interpreter consumes. Unknown
/// content block types are dropped.
pub fn from_invoke_response(resp: InvokeResponse) -> ProviderResponse {
    let content = resp
        .content
        .into_iter()
        .filter_map(|block| match block {
            WireResponseContent::Text { text } => Some(ResponseContent::Text { text }),
            WireResponseContent::Unknown => None,
        })
        .collect();

    ProviderResponse {
        stop_reason: resp.stop_reason,
        content,
    }
}
