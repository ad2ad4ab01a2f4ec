//! Error types for azkar-story library.

use std::io;
use thiserror::Error;

/// Result type alias for azkar-story operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading content, selecting designs
/// and computing layouts.
#[derive(Error, Debug)]
pub enum Error {
    /// A uniform pick was requested over an empty candidate set.
    ///
    /// This signals a caller precondition violation (for example an empty
    /// section reaching the item selector) and is never retried.
    #[error("Cannot pick from an empty {0}")]
    EmptyInput(&'static str),

    /// The content source does not match the expected shape.
    #[error("Schema error: {0}")]
    Schema(String),

    /// The content source is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error when reading content files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Requested section id is not present in the library.
    #[error("Section not found: {0}")]
    SectionNotFound(String),

    /// Seed code could not be parsed.
    #[error("Invalid seed: {0}")]
    InvalidSeed(String),

    /// Error while serializing a render tree.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyInput("item list");
        assert_eq!(err.to_string(), "Cannot pick from an empty item list");

        let err = Error::SectionNotFound("morning".to_string());
        assert_eq!(err.to_string(), "Section not found: morning");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
