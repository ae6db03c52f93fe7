//! Unity MCP Bridge
//!
//! Startup configuration for the bridge between MCP clients and the Unity
//! editor.
//!
//! ## Configuration Sources
//!
//! ```text
//! UNITY_MCP_PORT → UNITY_MCP_CONFIG file → config.json next to the binary → defaults
//! ```
//!
//! The first source present wins. The resulting [`FrozenConfig`] is built once
//! by [`initialize_configuration`] and shared read-only from then on.
//!
//! ## Example Configuration
//!
//! ```json
//! { "unity_port": 7000 }
//! ```

pub mod config;
pub mod error;
pub mod logging;

// Re-export main types
pub use config::{FrozenConfig, ServerConfig, initialize_configuration};
pub use error::{AppError, ConfigError, Result};
