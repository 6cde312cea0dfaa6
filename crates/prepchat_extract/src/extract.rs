use std::fs;
use std::path::Path;

use prepchat_core::MediaType;
use thiserror::Error;
use tracing::debug;

use crate::docx;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("unsupported file type: {0}")]
    Unsupported(String),

    #[error("pdf extraction failed: {0}")]
    Pdf(String),

    #[error("docx extraction failed: {0}")]
    Docx(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// What a file resolved to. Text goes into the document-context slot; images
/// ride along as a content part on the next turn.
#[derive(Debug, Clone)]
pub enum Extracted {
    Text(String),
    Image { data: Vec<u8>, media_type: MediaType },
}

/// Declared kind of an uploaded file, keyed on its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Docx,
    Txt,
    Image(MediaType),
}

impl FileKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(FileKind::Pdf),
            "docx" => Some(FileKind::Docx),
            "txt" => Some(FileKind::Txt),
            _ => MediaType::from_extension(&ext).map(FileKind::Image),
        }
    }
}

/// Extract content from `path`. Files of an unrecognized kind yield
/// [`ExtractError::Unsupported`]; the caller shows a notice and builds no
/// request.
pub fn extract(path: &Path) -> Result<Extracted, ExtractError> {
    let kind = FileKind::from_path(path)
        .ok_or_else(|| ExtractError::Unsupported(path.display().to_string()))?;

    debug!(path = %path.display(), ?kind, "extracting study material");

    match kind {
        FileKind::Pdf => {
            let text = pdf_extract::extract_text(path).map_err(|e| ExtractError::Pdf(e.to_string()))?;
            Ok(Extracted::Text(text))
        }
        FileKind::Docx => Ok(Extracted::Text(docx::extract_text(path)?)),
        FileKind::Txt => Ok(Extracted::Text(fs::read_to_string(path)?)),
        FileKind::Image(media_type) => {
            let data = fs::read(path)?;
            Ok(Extracted::Image { data, media_type })
        }
    }
}
