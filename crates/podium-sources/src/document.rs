//! Plain-text extraction from uploaded documents

use crate::error::SourceError;
use podium_domain::DocumentInput;
use tracing::debug;

/// Pages of a PDF that are read; the rest is ignored
pub const MAX_PDF_PAGES: usize = 10;

const PAGE_BREAK: char = '\u{c}';

/// Read the text of a document
///
/// PDFs are limited to their first [`MAX_PDF_PAGES`] pages; anything else
/// must be UTF-8 text.
///
/// # Errors
///
/// `SourceError::Document` when the file cannot be read or holds no text.
pub fn extract_document_text(document: &DocumentInput) -> Result<String, SourceError> {
    let text = if document.is_pdf() {
        let raw = pdf_extract::extract_text_from_mem(&document.bytes).map_err(|e| {
            SourceError::Document(format!("{} could not be parsed as PDF: {}", document.file_name, e))
        })?;
        first_pages(&raw, MAX_PDF_PAGES)
    } else {
        String::from_utf8(document.bytes.clone()).map_err(|e| {
            SourceError::Document(format!("{} is not a text file: {}", document.file_name, e))
        })?
    };

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(SourceError::Document(format!(
            "no text content found in {}",
            document.file_name
        )));
    }

    debug!("Extracted {} chars from {}", text.len(), document.file_name);
    Ok(text)
}

fn first_pages(raw: &str, max_pages: usize) -> String {
    raw.split(PAGE_BREAK)
        .take(max_pages)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_document() {
        let doc = DocumentInput::new("bio.txt", "  I coach founders.\n");
        assert_eq!(extract_document_text(&doc).unwrap(), "I coach founders.");
    }

    #[test]
    fn test_empty_document_fails() {
        let doc = DocumentInput::new("empty.txt", " \n\t ");
        assert!(matches!(extract_document_text(&doc), Err(SourceError::Document(_))));
    }

    #[test]
    fn test_binary_document_fails() {
        let doc = DocumentInput::new("photo.jpg", vec![0xff, 0xd8, 0xff, 0xe0, 0x00]);
        assert!(matches!(extract_document_text(&doc), Err(SourceError::Document(_))));
    }

    #[test]
    fn test_first_pages() {
        let raw = (1..=12).map(|n| format!("page {}", n)).collect::<Vec<_>>().join("\u{c}");
        let text = first_pages(&raw, MAX_PDF_PAGES);
        assert!(text.contains("page 10"));
        assert!(!text.contains("page 11"));
    }
}
