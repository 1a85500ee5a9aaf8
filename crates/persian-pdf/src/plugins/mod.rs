//! Plugin system for document parsing.
//!
//! Format support is provided by [`DocumentExtractor`] plugins held in a
//! [`DocumentExtractorRegistry`]. The built-in PDF and plain-text extractors
//! are registered by [`DocumentExtractorRegistry::with_defaults`]; callers can
//! add their own and hand the registry to an
//! [`AutoDetectParser`](crate::core::parser::AutoDetectParser).
//!
//! Plugins are stored as `Arc<dyn DocumentExtractor>`:
//!
//! ```rust
//! use persian_pdf::plugins::{DocumentExtractor, DocumentExtractorRegistry, Plugin};
//! use persian_pdf::types::{Metadata, ParsedDocument};
//! use std::sync::Arc;
//!
//! struct RstExtractor;
//!
//! impl Plugin for RstExtractor {
//!     fn name(&self) -> &str { "rst-extractor" }
//! }
//!
//! impl DocumentExtractor for RstExtractor {
//!     fn extract_bytes(&self, content: &[u8], mime_type: &str) -> persian_pdf::Result<ParsedDocument> {
//!         let text = String::from_utf8_lossy(content).into_owned();
//!         Ok(ParsedDocument::new(text, mime_type, Metadata::default()))
//!     }
//!
//!     fn supported_mime_types(&self) -> &[&str] { &["text/x-rst"] }
//! }
//!
//! let mut registry = DocumentExtractorRegistry::with_defaults()?;
//! registry.register(Arc::new(RstExtractor))?;
//! assert_eq!(registry.get("text/x-rst")?.name(), "rst-extractor");
//! # Ok::<(), persian_pdf::PersianPdfError>(())
//! ```

pub mod extractor;
pub mod registry;
pub mod traits;

pub use extractor::DocumentExtractor;
pub use registry::DocumentExtractorRegistry;
pub use traits::Plugin;
