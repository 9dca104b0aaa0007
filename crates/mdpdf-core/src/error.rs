//! Error types for mdpdf

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mdpdf operations
#[derive(Error, Debug)]
pub enum MdpdfError {
    /// Source document missing or unreadable
    #[error("Cannot read input {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Font asset missing, unreadable, or not a usable TrueType font
    #[error("Cannot load font {}: {reason}", .path.display())]
    Font { path: PathBuf, reason: String },

    /// Destination path unwritable
    #[error("Cannot write output {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Render error during document generation
    #[error("Render error: {0}")]
    Render(String),
}

/// Result type alias for mdpdf operations
pub type Result<T> = std::result::Result<T, MdpdfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_message() {
        let err = MdpdfError::Input {
            path: PathBuf::from("missing.md"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Cannot read input missing.md: not found");
    }

    #[test]
    fn test_font_error_message() {
        let err = MdpdfError::Font {
            path: PathBuf::from("DejaVuSans.ttf"),
            reason: "no such file".into(),
        };
        assert!(err.to_string().contains("DejaVuSans.ttf"));
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn test_io_from() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: MdpdfError = io.into();
        assert!(matches!(err, MdpdfError::Io(_)));
    }
}
