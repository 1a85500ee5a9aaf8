//! Document parsing: turn a byte stream into text.
//!
//! [`DocumentParser`] is the seam the orchestrator depends on. The default
//! implementation, [`AutoDetectParser`], reads the whole stream, works out
//! the MIME type and dispatches to the matching
//! [`DocumentExtractor`](crate::plugins::DocumentExtractor) from its registry.

use crate::core::{io, mime};
use crate::plugins::DocumentExtractorRegistry;
use crate::types::ParsedDocument;
use crate::{PersianPdfError, Result};
use std::io::Read;

/// Anything that can produce text from a document stream.
///
/// Implementations read `reader` to the end but never close it.
pub trait DocumentParser: Send + Sync {
    /// Parse a document whose format must be detected from its content.
    ///
    /// # Errors
    ///
    /// - `PersianPdfError::Io` - the stream cannot be read
    /// - `PersianPdfError::Parsing` / `UnsupportedFormat` - the document cannot be interpreted
    /// - `PersianPdfError::ContentHandling` - text extraction failed
    fn parse(&self, reader: &mut dyn Read) -> Result<ParsedDocument> {
        self.parse_with_hint(reader, None)
    }

    /// Parse a document, preferring `mime_hint` when it names a supported format.
    fn parse_with_hint(&self, reader: &mut dyn Read, mime_hint: Option<&str>) -> Result<ParsedDocument>;
}

/// Parser that sniffs the document format and picks an extractor by MIME type.
pub struct AutoDetectParser {
    registry: DocumentExtractorRegistry,
}

impl AutoDetectParser {
    /// Parser over the built-in extractors.
    pub fn new() -> Result<Self> {
        Ok(Self::with_registry(DocumentExtractorRegistry::with_defaults()?))
    }

    /// Parser over a caller-supplied registry.
    pub fn with_registry(registry: DocumentExtractorRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &DocumentExtractorRegistry {
        &self.registry
    }

    /// Decide which MIME type to dispatch on.
    ///
    /// A hint wins when some extractor handles it; otherwise the content is
    /// sniffed.
    fn resolve_mime_type(&self, content: &[u8], mime_hint: Option<&str>) -> Result<String> {
        if let Some(hint) = mime_hint {
            if self.registry.supports(hint) {
                return Ok(hint.to_string());
            }
            tracing::warn!(mime_type = hint, "ignoring unsupported MIME type hint");
        }

        mime::detect_mime_type_from_bytes(content).ok_or_else(|| {
            PersianPdfError::UnsupportedFormat("could not detect document format".to_string())
        })
    }
}

impl DocumentParser for AutoDetectParser {
    fn parse_with_hint(&self, reader: &mut dyn Read, mime_hint: Option<&str>) -> Result<ParsedDocument> {
        let content = io::read_stream(reader)?;
        let mime_type = self.resolve_mime_type(&content, mime_hint)?;
        let extractor = self.registry.get(&mime_type)?;

        tracing::debug!(
            extractor = extractor.name(),
            mime_type = %mime_type,
            bytes = content.len(),
            "parsing document"
        );

        extractor.extract_bytes(&content, &mime_type)
    }
}
