//! Configuration types for unity-mcp-bridge
//!
//! This module defines the configuration record shared by every component of
//! the bridge, and the frozen handle it is distributed through once startup
//! overrides have been applied.

use serde::Serialize;
use std::ops::Deref;
use std::sync::Arc;
use std::time::Duration;

/// Default log line layout
pub const DEFAULT_LOG_FORMAT: &str = "{timestamp} - {target} - {level} - {message}";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerConfig {
    /// Host of the Unity editor endpoint
    pub remote_host: String,

    /// Port of the Unity editor endpoint
    pub remote_port: u16,

    /// Port this server listens on
    pub server_port: u16,

    /// Idle time in seconds before a connection is considered dead
    pub connection_timeout_secs: f64,

    /// I/O buffer allocation size in bytes
    pub buffer_size: usize,

    /// Minimum severity logged (trace, debug, info, warn, error)
    pub log_level: String,

    /// Log line layout, or `json` for structured output
    pub log_format: String,

    /// Retry ceiling for transient operations
    pub max_retries: u32,

    /// Base delay in seconds between retries
    pub retry_delay_secs: f64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            remote_host: "localhost".to_string(),
            remote_port: 6400,
            server_port: 6500,
            connection_timeout_secs: 86400.0,
            buffer_size: 16 * 1024 * 1024,
            log_level: "INFO".to_string(),
            log_format: DEFAULT_LOG_FORMAT.to_string(),
            max_retries: 3,
            retry_delay_secs: 1.0,
        }
    }
}

impl ServerConfig {
    /// Address of the Unity endpoint as `host:port`
    pub fn remote_addr(&self) -> String {
        format!("{}:{}", self.remote_host, self.remote_port)
    }

    /// Connection idle timeout
    pub fn connection_timeout(&self) -> Duration {
        Duration::from_secs_f64(self.connection_timeout_secs)
    }

    /// Base delay between retries
    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs_f64(self.retry_delay_secs)
    }

    /// Finish startup and hand out a read-only shared handle.
    pub fn freeze(self) -> FrozenConfig {
        FrozenConfig(Arc::new(self))
    }
}

/// Immutable, cheaply clonable handle to the finalized configuration.
///
/// Only shared references can be obtained from it, so nothing can change the
/// record after startup.
#[derive(Debug, Clone)]
pub struct FrozenConfig(Arc<ServerConfig>);

impl Deref for FrozenConfig {
    type Target = ServerConfig;

    fn deref(&self) -> &ServerConfig {
        &self.0
    }
}

impl AsRef<ServerConfig> for FrozenConfig {
    fn as_ref(&self) -> &ServerConfig {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.remote_host, "localhost");
        assert_eq!(config.remote_port, 6400);
        assert_eq!(config.server_port, 6500);
        assert_eq!(config.connection_timeout_secs, 86400.0);
        assert_eq!(config.buffer_size, 16_777_216);
        assert_eq!(config.log_level, "INFO");
        assert_eq!(config.log_format, DEFAULT_LOG_FORMAT);
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.retry_delay_secs, 1.0);
    }

    #[test]
    fn test_durations_and_addr() {
        let config = ServerConfig {
            remote_host: "10.0.0.5".to_string(),
            remote_port: 7000,
            retry_delay_secs: 0.25,
            ..Default::default()
        };
        assert_eq!(config.remote_addr(), "10.0.0.5:7000");
        assert_eq!(config.connection_timeout(), Duration::from_secs(86400));
        assert_eq!(config.retry_delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_frozen_handles_share_one_record() {
        let frozen = ServerConfig::default().freeze();
        let other = frozen.clone();
        assert!(std::ptr::eq(&*frozen, &*other));
        assert_eq!(other.remote_port, 6400);
    }

    #[test]
    fn test_serialize_field_names() {
        let json = serde_json::to_value(ServerConfig::default()).unwrap();
        assert_eq!(json["remote_port"], 6400);
        assert_eq!(json["log_level"], "INFO");
    }
}
