//! DOCX text extraction: the document is a zip package; the readable text
//! lives in `word/document.xml`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use zip::ZipArchive;

use crate::extract::ExtractError;

const DOCUMENT_ENTRY: &str = "word/document.xml";

pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    let file = File::open(path)?;
    let mut archive =
        ZipArchive::new(file).map_err(|e| ExtractError::Docx(format!("not a docx package: {e}")))?;

    let mut entry = archive
        .by_name(DOCUMENT_ENTRY)
        .map_err(|e| ExtractError::Docx(format!("missing {DOCUMENT_ENTRY}: {e}")))?;

    let mut xml = String::new();
    entry
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Docx(format!("unreadable {DOCUMENT_ENTRY}: {e}")))?;

    Ok(xml_to_text(&xml))
}

/// Strip WordprocessingML down to paragraph text.
fn xml_to_text(xml: &str) -> String {
    let with_breaks = xml
        .replace("</w:p>", "\n")
        .replace("<w:tab/>", "\t")
        .replace("<w:br/>", "\n");

    let mut result = String::with_capacity(with_breaks.len());
    let mut in_tag = false;
    for ch in with_breaks.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(ch),
            _ => {}
        }
    }

    decode_xml_entities(&result)
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn decode_xml_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_to_text_paragraphs() {
        let xml = "<w:p><w:r><w:t>First paragraph</w:t></w:r></w:p>\
                   <w:p><w:r><w:t>Second</w:t></w:r><w:r><w:t> half</w:t></w:r></w:p>";
        assert_eq!(xml_to_text(xml), "First paragraph\nSecond half");
    }

    #[test]
    fn test_xml_entities_decoded() {
        let xml = "<w:p><w:t>Tom &amp; Jerry &lt;3</w:t></w:p>";
        assert_eq!(xml_to_text(xml), "Tom & Jerry <3");
    }

    #[test]
    fn test_empty_paragraphs_dropped() {
        let xml = "<w:p></w:p><w:p><w:t>only one</w:t></w:p><w:p></w:p>";
        assert_eq!(xml_to_text(xml), "only one");
    }
}
