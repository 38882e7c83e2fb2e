//! Error types for positional encoding and decoding.

use thiserror::Error;

/// Errors raised while building a layout, padding a value, or decoding a line.
#[derive(Debug, Error)]
pub enum PositionalError {
    /// The width token of a field annotation is not a non-negative integer.
    #[error("field `{field}`: annotation size should be an integer, got {annotation:?}")]
    InvalidSize { field: String, annotation: String },

    /// Slot text could not be parsed as the field's numeric kind.
    #[error("field `{field}`: invalid number {text:?}")]
    InvalidNumber {
        field: String,
        text: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Slot text is not a recognized boolean literal.
    #[error("field `{field}`: invalid boolean {text:?}")]
    InvalidBoolean { field: String, text: String },

    /// The line ended before the field's slot did.
    #[error("field `{field}`: slot {start}..{end} exceeds line length {len}")]
    LineTooShort {
        field: String,
        start: usize,
        end: usize,
        len: usize,
    },

    /// A single-record decode was given more or fewer than one line.
    #[error("expected exactly 1 line, got {count}")]
    UnexpectedLineCount { count: usize },

    /// Negative width or empty fill passed to the padding primitive.
    #[error("invalid padding: {0}")]
    InvalidPaddingConfig(&'static str),
}

/// Result type for positional operations.
pub type Result<T> = std::result::Result<T, PositionalError>;
