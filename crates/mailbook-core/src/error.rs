//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A serialized record had fewer fields than the format requires.
    #[error("Malformed mail record: expected {expected} fields, found {found}")]
    MalformedRecord {
        /// Number of fields the format requires.
        expected: usize,
        /// Number of fields actually present.
        found: usize,
    },

    /// A category tag did not match any known category.
    #[error("Unknown mail category: {0:?}")]
    UnknownCategory(String),

    /// A mail id could not be parsed.
    #[error("Invalid mail id: {0:?}")]
    InvalidId(String),

    /// The configured time zone is not a known IANA zone.
    #[error("Invalid time zone: {0}")]
    InvalidTimeZone(String),

    /// The configured timestamp pattern contains an unsupported specifier.
    #[error("Invalid timestamp format: {0}")]
    InvalidTimestampFormat(String),

    /// The mail id does not map to a representable instant.
    #[error("Timestamp out of range: {0}")]
    TimestampOutOfRange(i64),

    /// A page layout with a zero budget.
    #[error("Invalid page layout: {0}")]
    InvalidLayout(String),

    /// The display collaborator failed to present a preview.
    #[error("Render error: {0}")]
    Render(String),

    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
