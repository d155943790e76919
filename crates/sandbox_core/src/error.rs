//! Error types for body export/import
//!
//! Provides error handling for writing, reading and parsing body documents.

use std::fmt;
use std::io;

/// Error type for serializer operations
#[derive(Debug)]
pub enum SerializeError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (malformed JSON or wrong document shape)
    Parse(serde_json::Error),
    /// Serialization error
    Serialize(serde_json::Error),
}

impl fmt::Display for SerializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializeError::Io(e) => write!(f, "IO error: {}", e),
            SerializeError::Parse(e) => write!(f, "Parse error: {}", e),
            SerializeError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for SerializeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SerializeError::Io(e) => Some(e),
            SerializeError::Parse(e) => Some(e),
            SerializeError::Serialize(e) => Some(e),
        }
    }
}

impl From<io::Error> for SerializeError {
    fn from(e: io::Error) -> Self {
        SerializeError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_io_error_display() {
        let err = SerializeError::from(io::Error::new(io::ErrorKind::NotFound, "file missing"));
        let msg = format!("{}", err);
        assert!(msg.contains("IO error"));
        assert!(msg.contains("file missing"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_parse_error_display() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err = SerializeError::Parse(json_err);
        assert!(format!("{}", err).starts_with("Parse error"));
    }
}
