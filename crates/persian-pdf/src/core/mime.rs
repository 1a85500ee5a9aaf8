//! MIME type detection and validation.
//!
//! Two sources are used: file extensions (for [`extract_file`](crate::extract_file)
//! hints) and magic bytes (for raw streams, via `infer`).

use crate::{PersianPdfError, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;

pub const PDF_MIME_TYPE: &str = "application/pdf";
pub const PLAIN_TEXT_MIME_TYPE: &str = "text/plain";
pub const MARKDOWN_MIME_TYPE: &str = "text/markdown";
pub const CSV_MIME_TYPE: &str = "text/csv";
pub const TSV_MIME_TYPE: &str = "text/tab-separated-values";

static EXT_TO_MIME: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    m.insert("pdf", PDF_MIME_TYPE);

    m.insert("txt", PLAIN_TEXT_MIME_TYPE);
    m.insert("text", PLAIN_TEXT_MIME_TYPE);
    m.insert("md", MARKDOWN_MIME_TYPE);
    m.insert("markdown", MARKDOWN_MIME_TYPE);
    m.insert("csv", CSV_MIME_TYPE);
    m.insert("tsv", TSV_MIME_TYPE);

    m
});

/// Detect MIME type from a file path.
///
/// Uses the file extension, falling back to `mime_guess`.
///
/// # Errors
///
/// Returns `PersianPdfError::Validation` if the file doesn't exist (when `check_exists` is true)
/// or the path has no usable extension.
/// Returns `PersianPdfError::UnsupportedFormat` if the extension is unknown.
pub fn detect_mime_type(path: impl AsRef<Path>, check_exists: bool) -> Result<String> {
    let path = path.as_ref();

    if check_exists && !path.exists() {
        return Err(PersianPdfError::validation(format!(
            "File does not exist: {}",
            path.display()
        )));
    }

    let extension = path.extension().and_then(|ext| ext.to_str()).map(|s| s.to_lowercase());

    if let Some(ext) = &extension
        && let Some(mime_type) = EXT_TO_MIME.get(ext.as_str())
    {
        return Ok(mime_type.to_string());
    }

    let guess = mime_guess::from_path(path).first();
    if let Some(mime) = guess {
        return Ok(mime.to_string());
    }

    if let Some(ext) = extension {
        return Err(PersianPdfError::UnsupportedFormat(format!("Unknown extension: .{}", ext)));
    }

    Err(PersianPdfError::validation(format!(
        "Could not determine MIME type from file path: {}",
        path.display()
    )))
}

/// Detect MIME type from document content.
///
/// Magic bytes win; content with no recognizable signature that is valid
/// UTF-8 is treated as plain text. Returns `None` for unrecognized binary data.
pub fn detect_mime_type_from_bytes(content: &[u8]) -> Option<String> {
    if let Some(kind) = infer::get(content) {
        return Some(kind.mime_type().to_string());
    }

    if std::str::from_utf8(content).is_ok() {
        return Some(PLAIN_TEXT_MIME_TYPE.to_string());
    }

    None
}
