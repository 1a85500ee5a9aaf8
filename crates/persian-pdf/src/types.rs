use crate::{PersianPdfError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How much post-processing to apply to extracted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMode {
    /// Return the parser output as-is.
    #[default]
    Normal,
    /// Detect the language, repair right-to-left character runs for Persian and
    /// Arabic text, then reverse the word order of every line.
    Advanced,
}

impl ExtractionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionMode::Normal => "normal",
            ExtractionMode::Advanced => "advanced",
        }
    }
}

impl fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtractionMode {
    type Err = PersianPdfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(ExtractionMode::Normal),
            "advanced" => Ok(ExtractionMode::Advanced),
            other => Err(PersianPdfError::validation(format!(
                "Unknown extraction mode '{}', expected 'normal' or 'advanced'",
                other
            ))),
        }
    }
}

/// Document-level metadata reported by a parser.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Application that created the original document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,

    /// Application that produced the PDF
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<usize>,

    /// Number of Unicode scalar values in the extracted text
    pub character_count: usize,

    pub line_count: usize,
}

impl Metadata {
    /// Recompute `character_count` and `line_count` for `content`.
    pub fn update_text_stats(&mut self, content: &str) {
        self.character_count = content.chars().count();
        self.line_count = content.lines().count();
    }
}

/// Raw output of a [`DocumentParser`](crate::core::parser::DocumentParser).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedDocument {
    pub content: String,
    pub mime_type: String,
    pub metadata: Metadata,
}

impl ParsedDocument {
    /// Build a document and fill in the text statistics from `content`.
    pub fn new(content: String, mime_type: impl Into<String>, mut metadata: Metadata) -> Self {
        metadata.update_text_stats(&content);
        Self {
            content,
            mime_type: mime_type.into(),
            metadata,
        }
    }
}

/// Detailed result of a single extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Final text, corrected when `mode` is `Advanced`
    pub content: String,
    pub mime_type: String,
    pub mode: ExtractionMode,

    /// Language reported by the detector; always `None` in `Normal` mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_language: Option<String>,

    /// Whether right-to-left character runs were reversed
    pub rtl_corrected: bool,

    pub metadata: Metadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_default_is_normal() {
        assert_eq!(ExtractionMode::default(), ExtractionMode::Normal);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("normal".parse::<ExtractionMode>().unwrap(), ExtractionMode::Normal);
        assert_eq!(" ADVANCED ".parse::<ExtractionMode>().unwrap(), ExtractionMode::Advanced);
        assert!("fast".parse::<ExtractionMode>().is_err());
    }

    #[test]
    fn test_mode_serde_roundtrip_names() {
        assert_eq!(serde_json::to_string(&ExtractionMode::Advanced).unwrap(), "\"advanced\"");
        let mode: ExtractionMode = serde_json::from_str("\"normal\"").unwrap();
        assert_eq!(mode, ExtractionMode::Normal);
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(ExtractionMode::Advanced.to_string(), "advanced");
    }

    #[test]
    fn test_parsed_document_counts() {
        let doc = ParsedDocument::new("سلام دنیا\nhello".to_string(), "text/plain", Metadata::default());
        assert_eq!(doc.metadata.character_count, 15);
        assert_eq!(doc.metadata.line_count, 2);
        assert_eq!(doc.mime_type, "text/plain");
    }

    #[test]
    fn test_metadata_skips_empty_fields() {
        let json = serde_json::to_value(Metadata::default()).unwrap();
        assert!(json.get("title").is_none());
        assert_eq!(json["character_count"], 0);
    }
}
