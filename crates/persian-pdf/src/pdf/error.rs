use std::fmt;

#[derive(Debug)]
pub enum PdfError {
    InvalidPdf(String),
    PasswordRequired,
    TextExtractionFailed { page: u32, message: String },
    IOError(std::io::Error),
}

impl fmt::Display for PdfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PdfError::InvalidPdf(msg) => write!(f, "Invalid PDF: {}", msg),
            PdfError::PasswordRequired => write!(f, "PDF is password-protected"),
            PdfError::TextExtractionFailed { page, message } => {
                write!(f, "Text extraction failed on page {}: {}", page, message)
            }
            PdfError::IOError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for PdfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PdfError::IOError(err) => Some(err),
            _ => None,
        }
    }
}

// NOTE: No From<std::io::Error> impl - only lopdf's own I/O failures are routed through here

impl From<lopdf::Error> for PdfError {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(io_err) => PdfError::IOError(io_err),
            _ => PdfError::InvalidPdf(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, PdfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pdf_error() {
        let err = PdfError::InvalidPdf("corrupted header".to_string());
        assert_eq!(err.to_string(), "Invalid PDF: corrupted header");
    }

    #[test]
    fn test_password_required_error() {
        let err = PdfError::PasswordRequired;
        assert_eq!(err.to_string(), "PDF is password-protected");
    }

    #[test]
    fn test_text_extraction_failed_error() {
        let err = PdfError::TextExtractionFailed {
            page: 3,
            message: "unknown operator".to_string(),
        };
        assert_eq!(err.to_string(), "Text extraction failed on page 3: unknown operator");
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = PdfError::IOError(std::io::Error::other("read failed"));
        assert_eq!(err.to_string(), "I/O error: read failed");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_from_lopdf_io_error() {
        let err: PdfError = lopdf::Error::IO(std::io::Error::other("disk gone")).into();
        assert!(matches!(err, PdfError::IOError(_)));
    }
}
