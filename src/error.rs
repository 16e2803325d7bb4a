//! Error types for the extractor.

use thiserror::Error;

/// Main error type for the doctext library.
///
/// Everything that can go wrong here is either reading the input file or
/// parsing it as XML; both surface to the CLI as a single printed
/// `Error: ...` line.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// IO error (missing file, permission denied, invalid UTF-8 read).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),
}

/// Result type alias for extractor operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = ExtractError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        assert!(err.to_string().starts_with("IO error:"));
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn test_parse_error_display() {
        let parse_err = match roxmltree::Document::parse("<unclosed>") {
            Err(e) => e,
            Ok(_) => unreachable!("malformed XML must not parse"),
        };
        let err = ExtractError::XmlParse(parse_err);
        assert!(err.to_string().starts_with("XML parsing failed:"));
    }
}
