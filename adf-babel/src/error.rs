//! Error types for format operations
//!
//! The markup engine itself never fails; these errors come from the layers
//! around it (format lookup, ADF JSON decoding, serialization options).

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// No format registered under this name
    FormatNotFound(String),
    /// Input could not be decoded into a document
    ParseError(String),
    /// Document could not be encoded
    SerializationError(String),
    /// Format does not support the requested direction
    NotSupported(String),
    /// A serialization option had a value the format cannot use
    InvalidOption { key: String, value: String },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            FormatError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
            FormatError::InvalidOption { key, value } => {
                write!(f, "Invalid value '{value}' for option '{key}'")
            }
        }
    }
}

impl std::error::Error for FormatError {}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            FormatError::SerializationError(err.to_string())
        } else {
            FormatError::ParseError(err.to_string())
        }
    }
}
