//! Core extraction orchestration module.
//!
//! - **Entry Points**: [`TextExtractor`] and the [`extract_text`] / [`extract_file`] helpers
//! - **Parsing**: the [`DocumentParser`] seam and its MIME-dispatching default
//! - **MIME Detection**: from file extensions and magic bytes
//! - **Configuration**: loading [`ExtractionConfig`] from TOML, YAML or JSON
//! - **I/O**: stream reading and path validation

pub mod config;
pub mod extractor;
pub mod io;
pub mod mime;
pub mod parser;

pub use config::{ExtractionConfig, LanguageDetectionConfig};
pub use extractor::{TextExtractor, correct_rtl_text, extract_file, extract_text};
pub use parser::{AutoDetectParser, DocumentParser};
