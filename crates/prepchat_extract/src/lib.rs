//! prepchat_extract — turns an uploaded study file into either plain text or
//! an image payload for the next outgoing turn.

mod docx;
mod extract;

pub use extract::{extract, ExtractError, Extracted, FileKind};
