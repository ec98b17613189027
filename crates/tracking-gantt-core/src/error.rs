//! Error types for snapshot reading and chart rendering.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all tracking Gantt operations.
#[derive(Error, Debug)]
pub enum GanttError {
    /// A consulted line does not hold the expected integers
    #[error("Format error on line {line}: {reason}")]
    Format { line: usize, reason: String },
    /// The snapshot ended before all required lines were read
    #[error("Unexpected end of input at line {line}: expected {expected}")]
    UnexpectedEof { line: usize, expected: String },
    /// File system operation errors
    #[error("File system error at path '{}': {source}", path.display())]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Parsed data that violates the snapshot invariants
    #[error("Inconsistent snapshot field '{field}': {reason}")]
    Inconsistent { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Drawing backend errors
    #[error("Render error: {message}")]
    Render { message: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
}

/// Builder for creating format errors tied to a line of input.
pub struct FormatErrorBuilder {
    line: usize,
}

impl FormatErrorBuilder {
    /// Create a new format error builder for a 1-based line number.
    pub fn new(line: usize) -> Self {
        Self { line }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> GanttError {
        GanttError::Format {
            line: self.line,
            reason: reason.into(),
        }
    }
}

/// Builder for creating snapshot consistency errors.
pub struct InconsistentBuilder {
    field: String,
}

impl InconsistentBuilder {
    /// Create a new consistency error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> GanttError {
        GanttError::Inconsistent {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl GanttError {
    /// Creates a builder for format errors.
    pub fn format(line: usize) -> FormatErrorBuilder {
        FormatErrorBuilder::new(line)
    }

    /// Creates a builder for consistency errors.
    pub fn inconsistent(field: impl Into<String>) -> InconsistentBuilder {
        InconsistentBuilder::new(field)
    }

    /// Creates a render error from any message.
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// Whether the error comes from malformed or truncated input.
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. } | Self::UnexpectedEof { .. })
    }
}

/// Extension trait mapping drawing backend failures into [`GanttError`].
pub trait RenderResultExt<T> {
    /// Map any error into a render error with a message.
    fn render_context(self, message: &str) -> Result<T>;
}

impl<T, E> RenderResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error,
{
    fn render_context(self, message: &str) -> Result<T> {
        self.map_err(|e| GanttError::render(format!("{message}: {e}")))
    }
}

/// Extension trait for adding configuration context to any error.
pub trait ConfigResultExt<T> {
    /// Add lazy context to any error type, converting to a configuration
    /// error.
    fn config_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

impl<T, E> ConfigResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error,
{
    fn config_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| GanttError::Configuration {
            message: format!("{}: {}", f(), e),
        })
    }
}

/// Result type alias for tracking Gantt operations
pub type Result<T> = std::result::Result<T, GanttError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_builder_carries_line() {
        let err = GanttError::format(4).with_reason("invalid integer 'x'");
        assert!(err.is_format());
        assert_eq!(
            err.to_string(),
            "Format error on line 4: invalid integer 'x'"
        );
    }

    #[test]
    fn test_inconsistent_builder() {
        let err = GanttError::inconsistent("baseline").with_reason("expected 3 values, got 2");
        assert!(!err.is_format());
        assert!(err.to_string().contains("'baseline'"));
    }

    #[test]
    fn test_render_context_maps_any_error() {
        let res: std::result::Result<(), std::fmt::Error> = Err(std::fmt::Error);
        let err = res.render_context("drawing bar").unwrap_err();
        match err {
            GanttError::Render { message } => assert!(message.starts_with("drawing bar")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_config_context() {
        let res: std::result::Result<i32, std::num::ParseIntError> = "nope".parse::<i32>();
        let err = res.config_context(|| "reading width").unwrap_err();
        assert!(matches!(err, GanttError::Configuration { .. }));
        assert!(err.to_string().contains("reading width"));
    }
}
