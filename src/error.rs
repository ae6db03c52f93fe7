//! Error types for unity-mcp-bridge
//!
//! This module defines the error hierarchy used throughout the application.
//! We use `thiserror` for library-style errors that are part of the API;
//! the binary wraps them in `anyhow` at the boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Configuration-related errors
///
/// The override pass never propagates these; they are logged and the
/// affected field keeps its previous value.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid value for '{key}' in {}: {value}", .path.display())]
    InvalidValue {
        path: PathBuf,
        key: String,
        value: String,
    },
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue {
            path: PathBuf::from("/tmp/config.json"),
            key: "unity_port".into(),
            value: "\"abc\"".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for 'unity_port' in /tmp/config.json: \"abc\""
        );
    }

    #[test]
    fn test_app_error_from_config_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: AppError = ConfigError::Read {
            path: PathBuf::from("config.json"),
            source: io,
        }
        .into();

        assert!(matches!(err, AppError::Config(ConfigError::Read { .. })));
        assert!(err.to_string().starts_with("Configuration error: "));
    }
}
