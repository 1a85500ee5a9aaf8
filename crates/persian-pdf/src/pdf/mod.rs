//! PDF document processing utilities.
//!
//! Low-level helpers backing [`crate::extractors::PdfExtractor`]: loading a
//! document from memory, page-ordered text extraction and `Info` dictionary
//! metadata, all on top of `lopdf`.
//!
//! # Example
//!
//! ```rust,no_run
//! use persian_pdf::pdf::extract_text_from_pdf;
//!
//! # fn example() -> persian_pdf::Result<()> {
//! let pdf_bytes = std::fs::read("document.pdf")?;
//! let text = extract_text_from_pdf(&pdf_bytes)?;
//! println!("Text: {}", text);
//! # Ok(())
//! # }
//! ```
pub mod error;
pub mod metadata;
pub mod text;

pub use error::PdfError;
pub use metadata::extract_metadata;
pub use text::{extract_text_from_document, extract_text_from_pdf, load_document};
