//! Error types for format operations

use thiserror::Error;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error while reading a tree from its serialized form
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Operation or option not supported by the format
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// Option value the format cannot interpret
    #[error("Invalid value '{value}' for option '{option}'")]
    InvalidOption { option: String, value: String },
}
