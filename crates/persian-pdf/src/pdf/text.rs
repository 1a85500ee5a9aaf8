//! PDF text extraction module.
//!
//! Text is pulled out of each page's content stream with `lopdf`, in page
//! order. The glyph order inside a run is whatever the content stream holds;
//! right-to-left correction happens later in [`crate::text::rtl`].

use super::error::{PdfError, Result};
use lopdf::Document;

/// Load a PDF document from memory.
///
/// Encrypted documents are rejected with [`PdfError::PasswordRequired`].
pub fn load_document(pdf_bytes: &[u8]) -> Result<Document> {
    let document = Document::load_mem(pdf_bytes)?;

    if document.is_encrypted() {
        return Err(PdfError::PasswordRequired);
    }

    Ok(document)
}

/// Extract the text of every page of `document`, in page order.
///
/// Pages are separated by a newline. A page whose content cannot be decoded
/// fails the whole extraction; partial text is never returned.
pub fn extract_text_from_document(document: &Document) -> Result<String> {
    let pages = document.get_pages();
    let mut content = String::new();

    for page_number in pages.keys() {
        let page_text = document
            .extract_text(&[*page_number])
            .map_err(|e| PdfError::TextExtractionFailed {
                page: *page_number,
                message: e.to_string(),
            })?;

        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(&page_text);
    }

    tracing::trace!(pages = pages.len(), chars = content.len(), "extracted PDF text");

    Ok(content)
}

/// Load `pdf_bytes` and extract the text of all pages.
pub fn extract_text_from_pdf(pdf_bytes: &[u8]) -> Result<String> {
    let document = load_document(pdf_bytes)?;
    extract_text_from_document(&document)
}
