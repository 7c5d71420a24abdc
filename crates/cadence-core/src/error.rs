//! Error types for the plan generator library.

use thiserror::Error;

/// Comprehensive error type for all generator operations.
#[derive(Error, Debug)]
pub enum PlanError {
    /// A required brief field is missing or blank
    #[error("Missing required field '{field}'")]
    MissingField { field: &'static str },

    /// An enum-valued field carried an unknown string; the message spells
    /// out the allowed set so the caller can surface a correction request
    #[error("Unsupported value for field '{field}': {message}")]
    UnsupportedValue { field: &'static str, message: String },

    /// A numeric field is outside its documented bounds
    #[error("Field '{field}' is out of range: {value} (allowed: {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },

    /// A CSV calendar could not be parsed back into plan items
    #[error("CSV parse error on line {line}: {message}")]
    CsvParse { line: usize, message: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl PlanError {
    /// Creates a missing-field error.
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Creates an unsupported-value error for a field.
    pub fn unsupported(field: &'static str, message: impl Into<String>) -> Self {
        Self::UnsupportedValue {
            field,
            message: message.into(),
        }
    }

    /// Creates an out-of-range error for a bounded numeric field.
    pub fn out_of_range(field: &'static str, value: u64, min: u64, max: u64) -> Self {
        Self::OutOfRange {
            field,
            value,
            min,
            max,
        }
    }

    /// Creates a CSV parse error with line context.
    pub fn csv(line: usize, message: impl Into<String>) -> Self {
        Self::CsvParse {
            line,
            message: message.into(),
        }
    }
}

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, PlanError>;
