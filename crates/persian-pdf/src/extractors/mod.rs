//! Built-in document extractors.

#[cfg(feature = "pdf")]
pub mod pdf;
pub mod text;

#[cfg(feature = "pdf")]
pub use pdf::PdfExtractor;
pub use text::PlainTextExtractor;
