//! Plain text, Markdown and delimited-text extractor.

use crate::Result;
use crate::core::mime::{CSV_MIME_TYPE, MARKDOWN_MIME_TYPE, PLAIN_TEXT_MIME_TYPE, TSV_MIME_TYPE};
use crate::plugins::{DocumentExtractor, Plugin};
use crate::types::{Metadata, ParsedDocument};

/// Plain text extractor.
///
/// Decodes the bytes as UTF-8, replacing invalid sequences. The text is not
/// trimmed: surrounding whitespace and newlines are significant for word
/// reversal.
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for PlainTextExtractor {
    fn name(&self) -> &str {
        "plain-text-extractor"
    }

    fn description(&self) -> &str {
        "Extracts content from plain text, Markdown, CSV and TSV files"
    }
}

impl DocumentExtractor for PlainTextExtractor {
    fn extract_bytes(&self, content: &[u8], mime_type: &str) -> Result<ParsedDocument> {
        let text = String::from_utf8_lossy(content).into_owned();
        Ok(ParsedDocument::new(text, mime_type, Metadata::default()))
    }

    fn supported_mime_types(&self) -> &[&str] {
        &[
            PLAIN_TEXT_MIME_TYPE,
            MARKDOWN_MIME_TYPE,
            "text/x-markdown",
            CSV_MIME_TYPE,
            TSV_MIME_TYPE,
        ]
    }

    fn priority(&self) -> i32 {
        50
    }
}
