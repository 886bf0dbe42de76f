//! Custom error types for coordinate processing

use std::fmt;
use std::io;

/// Coordinate toolkit error types
#[derive(Debug)]
pub enum CoordError {
    /// I/O error
    IoError(io::Error),
    /// Index outside the valid bound of a coordinate list
    OutOfRange {
        /// Requested index
        index: usize,
        /// Length of the list at the time of the request
        len: usize,
    },
    /// Malformed coordinate text
    ParseError(String),
    /// Malformed configuration
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::IoError(e) => write!(f, "I/O error: {}", e),
            CoordError::OutOfRange { index, len } => {
                write!(f, "Index {} out of range for list of length {}", index, len)
            }
            CoordError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            CoordError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            CoordError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for CoordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CoordError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CoordError {
    fn from(error: io::Error) -> Self {
        CoordError::IoError(error)
    }
}

impl From<String> for CoordError {
    fn from(msg: String) -> Self {
        CoordError::GenericError(msg)
    }
}

/// Result type for coordinate operations
pub type CoordResult<T> = Result<T, CoordError>;
