//! Request builder: history + pending attachment in, `ModelRequest` out.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use prepchat_core::{Attachment, Turn};

use crate::normalize::normalize;
use crate::prompt::augment_with_document;
use crate::types::{ContentPart, ModelRequest};

/// Fixed generation ceiling for every call.
pub const MAX_OUTPUT_TOKENS: u32 = 4096;

/// Assemble the full request for the model call. Pure function of its
/// inputs; `history` is never mutated.
///
/// `current_text` is the user's latest submission (already appended to
/// `history` by the driver). Document attachments augment the text; image
/// attachments become a content part on the outgoing user turn.
pub fn build_request(
    system: &str,
    history: &[Turn],
    attachment: Option<&Attachment>,
    current_text: &str,
) -> ModelRequest {
    let doc_context = attachment.and_then(|a| a.document_text());
    let effective_text = augment_with_document(current_text, doc_context);

    let pending_image = attachment.and_then(|a| match a {
        Attachment::Image {
            data, media_type, ..
        } => Some(ContentPart::image(*media_type, BASE64.encode(data))),
        Attachment::Document { .. } => None,
    });

    ModelRequest {
        system: system.to_string(),
        max_output_tokens: MAX_OUTPUT_TOKENS,
        turns: normalize(history, pending_image, &effective_text),
    }
}
