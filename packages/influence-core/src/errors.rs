//! Error types for influence-core
//!
//! Every failure in the pipeline is an [`InfluenceError`] tagged with an
//! [`ErrorKind`]. Checks that a prototype would leave as debug assertions
//! (square matrix, weight range, usable pivot) are reported here instead.

use std::fmt;
use thiserror::Error;

use crate::config::ConfigError;

/// Pipeline error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input line does not match `from;to;value`
    Parse,
    /// Matrix shape invariant violated
    Dimension,
    /// Weight or column sum outside the tolerance-adjusted bounds
    Range,
    /// No usable pivot during elimination
    SingularMatrix,
    /// Inverse self-check failed
    Verification,
    /// Invalid configuration
    Config,
    /// I/O errors
    IO,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Parse => "parse",
            ErrorKind::Dimension => "dimension",
            ErrorKind::Range => "range",
            ErrorKind::SingularMatrix => "singular_matrix",
            ErrorKind::Verification => "verification",
            ErrorKind::Config => "config",
            ErrorKind::IO => "io",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pipeline error type
#[derive(Debug, Error)]
#[error("[{kind}] {message}")]
pub struct InfluenceError {
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
    pub kind: ErrorKind,
    pub message: String,
}

impl InfluenceError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors

    /// Malformed edge record at a 1-based line number
    pub fn parse(line_no: usize, line: &str) -> Self {
        Self::new(
            ErrorKind::Parse,
            format!(
                "line {}: expected 'from;to;value', got '{}'",
                line_no, line
            ),
        )
    }

    pub fn dimension(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Dimension, message)
    }

    pub fn range(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Range, message)
    }

    /// No pivot for `column` in an `n`×`n` elimination
    pub fn singular(column: usize, n: usize) -> Self {
        Self::new(
            ErrorKind::SingularMatrix,
            format!("no usable pivot in column {} of {}x{} matrix", column, n, n),
        )
    }

    pub fn verification(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Verification, message)
    }

    pub fn is_singular(&self) -> bool {
        self.kind == ErrorKind::SingularMatrix
    }
}

impl From<std::io::Error> for InfluenceError {
    fn from(err: std::io::Error) -> Self {
        InfluenceError::new(ErrorKind::IO, format!("I/O error: {}", err)).with_source(err)
    }
}

impl From<ConfigError> for InfluenceError {
    fn from(err: ConfigError) -> Self {
        InfluenceError::new(ErrorKind::Config, err.to_string()).with_source(err)
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, InfluenceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_parse_error_display() {
        let err = InfluenceError::parse(7, "A;B");
        assert_eq!(err.kind, ErrorKind::Parse);

        let msg = format!("{}", err);
        assert!(msg.starts_with("[parse]"));
        assert!(msg.contains("line 7"));
        assert!(msg.contains("'A;B'"));
    }

    #[test]
    fn test_singular_error() {
        let err = InfluenceError::singular(2, 3);
        assert!(err.is_singular());
        assert_eq!(
            format!("{}", err),
            "[singular_matrix] no usable pivot in column 2 of 3x3 matrix"
        );
    }

    #[test]
    fn test_range_error() {
        let err = InfluenceError::range("weight 1.5 out of range");
        assert_eq!(err.kind, ErrorKind::Range);
        assert!(!err.is_singular());
        assert_eq!(format!("{}", err), "[range] weight 1.5 out of range");
    }

    #[test]
    fn test_from_io_error() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "input.csv missing");
        let err: InfluenceError = io_err.into();

        assert_eq!(err.kind, ErrorKind::IO);
        let source = err.source().unwrap();
        assert!(source.to_string().contains("input.csv missing"));
    }

    #[test]
    fn test_from_config_error() {
        let err: InfluenceError = ConfigError::MissingVersion.into();
        assert_eq!(err.kind, ErrorKind::Config);
        assert!(err.message.contains("version"));
        assert!(err.source.is_some());
    }

    #[test]
    fn test_error_kind_as_str() {
        assert_eq!(ErrorKind::Parse.as_str(), "parse");
        assert_eq!(ErrorKind::Dimension.as_str(), "dimension");
        assert_eq!(ErrorKind::Range.as_str(), "range");
        assert_eq!(ErrorKind::SingularMatrix.as_str(), "singular_matrix");
        assert_eq!(ErrorKind::Verification.as_str(), "verification");
        assert_eq!(ErrorKind::Config.as_str(), "config");
        assert_eq!(ErrorKind::IO.as_str(), "io");
    }

    #[test]
    fn test_result_propagation() {
        fn inner() -> Result<()> {
            Err(InfluenceError::dimension("3x4 is not square"))
        }

        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }

        let err = outer().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Dimension);
    }
}
