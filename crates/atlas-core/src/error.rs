//! Error types for the rendering library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all rendering operations.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Timezone descriptor does not contain a `UTC±HH:MM` offset
    #[error("Malformed timezone '{value}': expected UTC±HH:MM")]
    MalformedTimezone { value: String },
    /// Location carries no timezone at all
    #[error("Location has no timezones")]
    MissingTimezone,
    /// Numeric field is out of range or not a number
    #[error("Invalid numeric input for field '{field}': {reason}")]
    InvalidNumericInput { field: String, reason: String },
    /// Local time falls outside the representable range
    #[error("Local time arithmetic failed: {source}")]
    TimeArithmetic {
        #[source]
        source: jiff::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating numeric validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> RenderError {
        RenderError::InvalidNumericInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl RenderError {
    /// Creates a builder for numeric validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a malformed timezone error for the offending descriptor.
    pub fn malformed_timezone(value: impl Into<String>) -> Self {
        Self::MalformedTimezone {
            value: value.into(),
        }
    }
}

/// Result type alias for rendering operations
pub type Result<T> = std::result::Result<T, RenderError>;
