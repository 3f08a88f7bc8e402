//! Error types for configuration loading.

use std::fmt;

/// Errors raised while loading or validating a round configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the config file.
    Io(std::io::Error),
    /// Config file is not valid JSON for a `RoundConfig`.
    Parse(serde_json::Error),
    /// Parsed, but a value is out of range.
    Invalid(String),
}

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "I/O error: {}", err),
            ConfigError::Parse(err) => write!(f, "Parse error: {}", err),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}
