//! Main extraction entry points.
//!
//! [`TextExtractor`] ties a [`DocumentParser`] to a [`LanguageDetector`] and
//! applies the requested [`ExtractionMode`]:
//!
//! - `Normal` returns the parser output unchanged.
//! - `Advanced` detects the language, reverses right-to-left character runs
//!   for Persian and Arabic, then reverses the word order of every line.
//!
//! # Functions
//!
//! - [`extract_text`] - Extract text from a reader with a fresh default extractor
//! - [`extract_file`] - Extract text from a file path with a fresh default extractor
//! - [`correct_rtl_text`] - Apply the `Advanced` correction to already-extracted text

use crate::Result;
use crate::core::config::ExtractionConfig;
use crate::core::parser::{AutoDetectParser, DocumentParser};
use crate::core::{io, mime};
use crate::language_detection::{LanguageDetector, default_detector};
use crate::text::{reverse_rtl_runs, reverse_words_in_lines};
use crate::types::{ExtractionMode, ExtractionResult, ParsedDocument};
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

/// Languages whose character runs are reversed in `Advanced` mode.
pub const RTL_LANGUAGE_CODES: &[&str] = &["fa", "ar"];

/// Document text extractor with optional right-to-left correction.
///
/// Holds no per-call state; one instance can serve any number of calls,
/// including concurrently.
///
/// # Example
///
/// ```rust
/// use persian_pdf::{ExtractionMode, TextExtractor};
/// use std::io::Cursor;
///
/// # fn main() -> persian_pdf::Result<()> {
/// let extractor = TextExtractor::with_defaults()?;
/// let text = extractor.extract_text(&mut Cursor::new("hello world"), ExtractionMode::Advanced)?;
/// assert_eq!(text, "world hello\n");
/// # Ok(())
/// # }
/// ```
pub struct TextExtractor {
    parser: Box<dyn DocumentParser>,
    detector: Box<dyn LanguageDetector>,
}

impl TextExtractor {
    pub fn new(parser: Box<dyn DocumentParser>, detector: Box<dyn LanguageDetector>) -> Self {
        Self { parser, detector }
    }

    /// Build the default parser and detector from `config`.
    ///
    /// `config.mode` is not stored; the mode is always passed per call.
    pub fn from_config(config: &ExtractionConfig) -> Result<Self> {
        let parser = AutoDetectParser::new()?;
        let detector = default_detector(&config.language_detection);
        Ok(Self::new(Box::new(parser), detector))
    }

    pub fn with_defaults() -> Result<Self> {
        Self::from_config(&ExtractionConfig::default())
    }

    /// Extract the text of the document in `reader`.
    ///
    /// # Errors
    ///
    /// Parser failures (`Io`, `Parsing`, `UnsupportedFormat`,
    /// `ContentHandling`) are returned unchanged. Language detection never fails.
    pub fn extract_text(&self, reader: &mut dyn Read, mode: ExtractionMode) -> Result<String> {
        self.extract(reader, mode).map(|result| result.content)
    }

    /// Like [`extract_text`](Self::extract_text), returning the detected
    /// language and document metadata as well.
    pub fn extract(&self, reader: &mut dyn Read, mode: ExtractionMode) -> Result<ExtractionResult> {
        let document = self.parser.parse(reader)?;
        Ok(self.post_process(document, mode))
    }

    pub fn extract_bytes(&self, content: &[u8], mode: ExtractionMode) -> Result<ExtractionResult> {
        self.extract(&mut Cursor::new(content), mode)
    }

    /// Extract from a file, using its extension as a format hint.
    ///
    /// # Errors
    ///
    /// Returns `PersianPdfError::Validation` if `path` is not an existing file,
    /// `PersianPdfError::Io` if it cannot be opened, and parser errors as for
    /// [`extract`](Self::extract).
    pub fn extract_file(&self, path: impl AsRef<Path>, mode: ExtractionMode) -> Result<ExtractionResult> {
        let path = path.as_ref();
        io::validate_file_exists(path)?;

        let mime_hint = mime::detect_mime_type(path, false).ok();
        let mut file = File::open(path)?;

        tracing::debug!(path = %path.display(), mime_hint = ?mime_hint, %mode, "extracting file");

        let document = self.parser.parse_with_hint(&mut file, mime_hint.as_deref())?;
        Ok(self.post_process(document, mode))
    }

    fn post_process(&self, document: ParsedDocument, mode: ExtractionMode) -> ExtractionResult {
        let ParsedDocument {
            content,
            mime_type,
            mut metadata,
        } = document;

        let (content, detected_language, rtl_corrected) = match mode {
            ExtractionMode::Normal => (content, None, false),
            ExtractionMode::Advanced => {
                let detected_language = self.detector.detect(&content);
                let rtl_corrected = is_rtl_language(detected_language.as_deref());

                tracing::debug!(
                    language = detected_language.as_deref().unwrap_or("unknown"),
                    rtl_corrected,
                    "applying advanced correction"
                );

                let corrected = correct_rtl_text(&content, detected_language.as_deref());
                metadata.update_text_stats(&corrected);
                (corrected, detected_language, rtl_corrected)
            }
        };

        ExtractionResult {
            content,
            mime_type,
            mode,
            detected_language,
            rtl_corrected,
            metadata,
        }
    }
}

fn is_rtl_language(language: Option<&str>) -> bool {
    language.is_some_and(|code| RTL_LANGUAGE_CODES.contains(&code))
}

/// Apply `Advanced`-mode correction to text whose language is already known.
///
/// Character runs are reversed only for `"fa"` and `"ar"`; word order is
/// reversed for every language, and every output line ends with `'\n'`.
///
/// ```rust
/// use persian_pdf::correct_rtl_text;
///
/// assert_eq!(correct_rtl_text("x y\nz", Some("en")), "y x\nz\n");
/// assert_eq!(correct_rtl_text("\u{0645}\u{0627}\u{0644}\u{0633}", Some("fa")), "\u{0633}\u{0644}\u{0627}\u{0645}\n");
/// ```
pub fn correct_rtl_text(text: &str, language: Option<&str>) -> String {
    if is_rtl_language(language) {
        reverse_words_in_lines(&reverse_rtl_runs(text))
    } else {
        reverse_words_in_lines(text)
    }
}

/// Extract text from `reader` with a freshly built default extractor.
///
/// ```rust
/// use persian_pdf::{extract_text, ExtractionMode};
/// use std::io::Cursor;
///
/// # fn main() -> persian_pdf::Result<()> {
/// let text = extract_text(&mut Cursor::new("x y\nz"), ExtractionMode::Normal)?;
/// assert_eq!(text, "x y\nz");
/// # Ok(())
/// # }
/// ```
pub fn extract_text(reader: &mut dyn Read, mode: ExtractionMode) -> Result<String> {
    TextExtractor::with_defaults()?.extract_text(reader, mode)
}

/// Extract text from the file at `path` with a freshly built default extractor.
pub fn extract_file(path: impl AsRef<Path>, mode: ExtractionMode) -> Result<String> {
    TextExtractor::with_defaults()?
        .extract_file(path, mode)
        .map(|result| result.content)
}
