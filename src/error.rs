//! Error types for tubedash

use std::io;
use thiserror::Error;

/// Result type alias for tubedash operations
pub type Result<T> = std::result::Result<T, DashError>;

/// Errors raised by the dashboard's ambient plumbing.
///
/// The dashboard model itself (clock, simulator, gauge geometry) is total;
/// only terminal/window setup and configuration handling can fail.
#[derive(Error, Debug)]
pub enum DashError {
    /// I/O error (terminal setup, config file access)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Frontend (window/event loop) error
    #[error("Frontend error: {0}")]
    Frontend(String),
}

impl From<toml::de::Error> for DashError {
    fn from(err: toml::de::Error) -> Self {
        DashError::Parse(format!("Failed to parse config: {}", err))
    }
}

impl From<toml::ser::Error> for DashError {
    fn from(err: toml::ser::Error) -> Self {
        DashError::Serialize(format!("Failed to serialize config: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let err: DashError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, DashError::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }

    #[test]
    fn test_toml_error_becomes_parse() {
        let err: DashError = toml::from_str::<toml::Table>("= nope").unwrap_err().into();
        assert!(matches!(err, DashError::Parse(_)));
    }
}
