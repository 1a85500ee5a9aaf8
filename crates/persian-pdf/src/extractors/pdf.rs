//! PDF document extractor.

use crate::Result;
use crate::core::mime::PDF_MIME_TYPE;
use crate::pdf::{extract_metadata, extract_text_from_document, load_document};
use crate::plugins::{DocumentExtractor, Plugin};
use crate::types::ParsedDocument;

/// PDF extractor backed by `lopdf`.
///
/// Errors map onto the crate taxonomy as follows: an unreadable or encrypted
/// file is a parsing error, a page that fails to decode is a content-handling
/// error, and I/O failures inside `lopdf` stay I/O errors.
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for PdfExtractor {
    fn name(&self) -> &str {
        "pdf-extractor"
    }

    fn description(&self) -> &str {
        "Extracts text and document info from PDF files"
    }
}

impl DocumentExtractor for PdfExtractor {
    fn extract_bytes(&self, content: &[u8], mime_type: &str) -> Result<ParsedDocument> {
        let document = load_document(content)?;
        let metadata = extract_metadata(&document)?;
        let text = extract_text_from_document(&document)?;

        tracing::debug!(
            pages = metadata.page_count.unwrap_or_default(),
            chars = text.len(),
            "extracted PDF document"
        );

        Ok(ParsedDocument::new(text, mime_type, metadata))
    }

    fn supported_mime_types(&self) -> &[&str] {
        &[PDF_MIME_TYPE]
    }

    fn priority(&self) -> i32 {
        50
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PersianPdfError;

    #[test]
    fn test_pdf_extractor_plugin_interface() {
        let extractor = PdfExtractor::new();
        assert_eq!(extractor.name(), "pdf-extractor");
        assert_eq!(extractor.supported_mime_types(), &["application/pdf"]);
        assert_eq!(extractor.priority(), 50);
    }

    #[test]
    fn test_invalid_pdf_is_parsing_error() {
        let extractor = PdfExtractor::new();
        let result = extractor.extract_bytes(b"not a pdf at all", PDF_MIME_TYPE);
        assert!(matches!(result, Err(PersianPdfError::Parsing { .. })));
    }

    #[test]
    fn test_empty_pdf_is_parsing_error() {
        let extractor = PdfExtractor::new();
        let err = extractor.extract_bytes(b"", PDF_MIME_TYPE).unwrap_err();
        assert!(err.is_parsing());
    }
}
