//! # Error Types

/// Errors from tagprep operations.
#[derive(Debug, thiserror::Error)]
pub enum TagprepError {
    /// A required source location is not configured.
    #[error("missing configuration: {key}")]
    Configuration {
        /// The configuration key (environment variable or field name).
        key: String,
    },

    /// A non-blank corpus line did not split into a ``word tag`` pair.
    #[error("malformed corpus line {line}: expected 2 fields, found {fields}")]
    MalformedLine {
        /// Zero-based index of the offending line.
        line: usize,

        /// The number of whitespace-delimited fields found.
        fields: usize,
    },

    /// A sentiment label outside the known classes.
    #[error("unknown sentiment class: {0}")]
    UnknownClass(i64),

    /// Vectorizer inputs failed the representation check.
    #[error("representation check failed: {0}")]
    Representation(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for tagprep operations.
pub type TPResult<T> = core::result::Result<T, TagprepError>;
