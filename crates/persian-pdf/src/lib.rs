//! persian-pdf - document text extraction with Persian and Arabic correction
//!
//! PDF text extracted glyph-by-glyph from right-to-left documents often comes
//! out with Persian and Arabic letters in visual order and words reversed on
//! each line. This crate extracts the text and, in
//! [`ExtractionMode::Advanced`], puts it back into logical order.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use persian_pdf::{extract_file, ExtractionMode};
//!
//! # fn main() -> persian_pdf::Result<()> {
//! let text = extract_file("document.pdf", ExtractionMode::Advanced)?;
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Core Module** (`core`): [`TextExtractor`] orchestration, parsing, MIME detection, config loading
//! - **Plugin System** (`plugins`): format extractors selected by MIME type and priority
//! - **Extractors** (`extractors`): built-in PDF and plain-text extractors
//! - **Text** (`text`): right-to-left run and word-order reversal
//! - **Language Detection** (`language_detection`): `whatlang`-backed detector
//!
//! # Features
//!
//! - `pdf` (default): PDF support through `lopdf`
//! - `language-detection` (default): `whatlang` language detection; without it
//!   `Advanced` mode never reverses character runs

#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod extractors;
pub mod language_detection;
pub mod plugins;
pub mod text;
pub mod types;

#[cfg(feature = "pdf")]
pub mod pdf;

pub use error::{PersianPdfError, Result};
pub use types::*;

pub use core::config::{ExtractionConfig, LanguageDetectionConfig};
pub use core::extractor::{TextExtractor, correct_rtl_text, extract_file, extract_text};
pub use core::parser::{AutoDetectParser, DocumentParser};
pub use language_detection::LanguageDetector;
pub use text::{reverse_rtl_runs, reverse_words_in_lines};
