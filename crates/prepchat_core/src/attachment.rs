use serde::{Deserialize, Serialize};

/// Image formats accepted by the model endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Png,
    Jpeg,
    Gif,
    Webp,
}

impl MediaType {
    /// MIME string as the messages API expects it (`image/png`, ...).
    pub fn as_mime(&self) -> &'static str {
        match self {
            MediaType::Png => "image/png",
            MediaType::Jpeg => "image/jpeg",
            MediaType::Gif => "image/gif",
            MediaType::Webp => "image/webp",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(MediaType::Png),
            "jpg" | "jpeg" => Some(MediaType::Jpeg),
            "gif" => Some(MediaType::Gif),
            "webp" => Some(MediaType::Webp),
            _ => None,
        }
    }
}

/// The single pending artifact to be merged into the next outgoing turn.
/// Replaced by a new upload or cleared explicitly; never part of history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Attachment {
    Document { name: String, text: String },
    Image { name: String, data: Vec<u8>, media_type: MediaType },
}

impl Attachment {
    pub fn name(&self) -> &str {
        match self {
            Attachment::Document { name, .. } => name,
            Attachment::Image { name, .. } => name,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Attachment::Image { .. })
    }

    /// Extracted document text, if this is a document attachment.
    pub fn document_text(&self) -> Option<&str> {
        match self {
            Attachment::Document { text, .. } => Some(text),
            Attachment::Image { .. } => None,
        }
    }
}
