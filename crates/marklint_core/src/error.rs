//! Linter error types.

use thiserror::Error;

/// Errors that can occur during linting.
#[derive(Debug, Error)]
pub enum LinterError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O error.
    #[error("File error: {0}")]
    File(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Cache error.
    #[error("Cache error: {0}")]
    Cache(#[from] marklint_cache::CacheError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LinterError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a file error.
    pub fn file(message: impl Into<String>) -> Self {
        Self::File(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns true for errors that must abort a run before any file is linted.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Internal(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::config(LinterError::config("bad extends"), "Configuration error: bad extends")]
    #[case::file(LinterError::file("missing.md"), "File error: missing.md")]
    #[case::parse(LinterError::parse("oops"), "Parse error: oops")]
    fn test_display(#[case] error: LinterError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error: LinterError = io.into();
        assert!(matches!(error, LinterError::Io(_)));
        assert!(!error.is_fatal());
    }

    #[test]
    fn test_config_is_fatal() {
        assert!(LinterError::config("x").is_fatal());
        assert!(!LinterError::file("x").is_fatal());
    }
}
