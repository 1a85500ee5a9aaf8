//! Document extractor plugin trait.

use crate::Result;
use crate::plugins::Plugin;
use crate::types::ParsedDocument;

/// Trait for format-specific document extractors.
///
/// An [`AutoDetectParser`](crate::core::parser::AutoDetectParser) picks one
/// extractor per document, by MIME type, from its registry.
///
/// # Priority System
///
/// When several extractors support the same MIME type, the one with the
/// highest priority wins. Default priority is 50.
///
/// # Example
///
/// ```rust
/// use persian_pdf::plugins::{DocumentExtractor, Plugin};
/// use persian_pdf::types::{Metadata, ParsedDocument};
/// use persian_pdf::Result;
///
/// struct ShoutingTextExtractor;
///
/// impl Plugin for ShoutingTextExtractor {
///     fn name(&self) -> &str { "shouting-text" }
/// }
///
/// impl DocumentExtractor for ShoutingTextExtractor {
///     fn extract_bytes(&self, content: &[u8], mime_type: &str) -> Result<ParsedDocument> {
///         let text = String::from_utf8_lossy(content).to_uppercase();
///         Ok(ParsedDocument::new(text, mime_type, Metadata::default()))
///     }
///
///     fn supported_mime_types(&self) -> &[&str] {
///         &["text/plain"]
///     }
///
///     fn priority(&self) -> i32 {
///         100
///     }
/// }
/// ```
pub trait DocumentExtractor: Plugin {
    /// Extract text and metadata from in-memory document bytes.
    ///
    /// # Errors
    ///
    /// - `PersianPdfError::Parsing` - the document cannot be interpreted
    /// - `PersianPdfError::ContentHandling` - extraction failed part-way through
    /// - `PersianPdfError::Io` - an I/O failure inside the backing library
    fn extract_bytes(&self, content: &[u8], mime_type: &str) -> Result<ParsedDocument>;

    /// MIME types this extractor handles. `"type/*"` acts as a wildcard.
    fn supported_mime_types(&self) -> &[&str];

    fn priority(&self) -> i32 {
        50
    }
}
