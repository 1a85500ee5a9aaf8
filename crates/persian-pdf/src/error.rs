//! Error types for persian-pdf.
//!
//! Every fallible operation in the crate returns [`PersianPdfError`]. The three
//! failure kinds a document parser can produce map onto dedicated variants and
//! are handed to the caller as-is:
//!
//! - `Io` - the input stream could not be read to completion
//! - `Parsing` - the document content cannot be interpreted
//! - `ContentHandling` - the extraction pipeline faulted on otherwise parseable input
//!
//! `UnsupportedFormat` is a parsing failure for content no registered extractor
//! handles. `Validation` covers configuration and caller input.
//!
//! The text transforms in [`crate::text`] are total and never produce errors.
//!
//! # Example
//!
//! ```rust
//! use persian_pdf::{PersianPdfError, Result};
//!
//! fn read_config(path: &str) -> Result<String> {
//!     // IO errors bubble up automatically via ?
//!     let content = std::fs::read_to_string(path)?;
//!
//!     if content.is_empty() {
//!         return Err(PersianPdfError::validation(format!("Config file is empty: {}", path)));
//!     }
//!
//!     Ok(content)
//! }
//! ```
use thiserror::Error;

/// Result type alias using `PersianPdfError`.
pub type Result<T> = std::result::Result<T, PersianPdfError>;

/// Main error type for all persian-pdf operations.
#[derive(Debug, Error)]
pub enum PersianPdfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parsing error: {message}")]
    Parsing {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Content handling error: {message}")]
    ContentHandling {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

impl PersianPdfError {
    /// True for the failures a document parser reports about the document
    /// itself (`Parsing` and `UnsupportedFormat`).
    pub fn is_parsing(&self) -> bool {
        matches!(self, Self::Parsing { .. } | Self::UnsupportedFormat(_))
    }
}

#[cfg(feature = "pdf")]
impl From<crate::pdf::error::PdfError> for PersianPdfError {
    fn from(err: crate::pdf::error::PdfError) -> Self {
        use crate::pdf::error::PdfError;

        match err {
            PdfError::IOError(io_err) => PersianPdfError::Io(io_err),
            PdfError::TextExtractionFailed { .. } => PersianPdfError::ContentHandling {
                message: err.to_string(),
                source: Some(Box::new(err)),
            },
            _ => PersianPdfError::Parsing {
                message: err.to_string(),
                source: Some(Box::new(err)),
            },
        }
    }
}

impl From<serde_json::Error> for PersianPdfError {
    fn from(err: serde_json::Error) -> Self {
        PersianPdfError::Validation {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

macro_rules! error_constructor {
    ($name:ident, $variant:ident) => {
        pastey::paste! {
            #[doc = "Create a " $variant " error"]
            pub fn $name<S: Into<String>>(message: S) -> Self {
                Self::$variant {
                    message: message.into(),
                    source: None,
                }
            }

            #[doc = "Create a " $variant " error with source"]
            pub fn [<$name _with_source>]<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
                message: S,
                source: E,
            ) -> Self {
                Self::$variant {
                    message: message.into(),
                    source: Some(Box::new(source)),
                }
            }
        }
    };
}

impl PersianPdfError {
    error_constructor!(parsing, Parsing);
    error_constructor!(content_handling, ContentHandling);
    error_constructor!(validation, Validation);
}
