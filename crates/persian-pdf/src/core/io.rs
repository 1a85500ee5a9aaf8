//! Stream and file I/O utilities.
//!
//! I/O errors are never wrapped: they surface as `PersianPdfError::Io`.

use crate::{PersianPdfError, Result};
use std::io::Read;
use std::path::Path;

/// Read `reader` to the end.
///
/// The reader is borrowed; closing it remains the caller's job.
///
/// # Errors
///
/// Returns `PersianPdfError::Io` if the stream cannot be read to completion.
pub fn read_stream(reader: &mut dyn Read) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer).map_err(PersianPdfError::Io)?;
    tracing::trace!(bytes = buffer.len(), "read document stream");
    Ok(buffer)
}

/// Validate that a file exists.
///
/// # Errors
///
/// Returns `PersianPdfError::Validation` if the path doesn't exist or is not a file.
pub fn validate_file_exists(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(PersianPdfError::validation(format!(
            "File does not exist: {}",
            path.display()
        )));
    }
    Ok(())
}
