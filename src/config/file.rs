//! JSON override file
//!
//! The file is a JSON object. Only `unity_port` is recognized; every other
//! key is ignored so newer files keep working with older servers.

use crate::config::types::ServerConfig;
use crate::error::ConfigError;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

/// Key holding the Unity port override
pub const REMOTE_PORT_KEY: &str = "unity_port";

/// Overrides found in a config file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileOverrides {
    pub remote_port: Option<u16>,
}

impl FileOverrides {
    /// Apply every present override to `config`.
    pub fn apply(&self, config: &mut ServerConfig) {
        if let Some(port) = self.remote_port {
            config.remote_port = port;
        }
    }
}

/// Read and parse overrides from a JSON file.
pub fn load_overrides_from_file(path: &Path) -> Result<FileOverrides, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let data: Value = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    // Anything other than an object carries no overrides
    let Value::Object(map) = data else {
        debug!(path = %path.display(), "Config file is not a JSON object, ignoring");
        return Ok(FileOverrides::default());
    };

    let remote_port = match map.get(REMOTE_PORT_KEY) {
        Some(value) => Some(coerce_port(value).ok_or_else(|| ConfigError::InvalidValue {
            path: path.to_path_buf(),
            key: REMOTE_PORT_KEY.to_string(),
            value: value.to_string(),
        })?),
        None => None,
    };

    Ok(FileOverrides { remote_port })
}

/// Apply overrides from `path` to `config`, logging instead of failing.
///
/// Returns whether the file was loaded successfully. On failure `config` is
/// left untouched.
pub fn apply_file_overrides(config: &mut ServerConfig, path: &Path) -> bool {
    match load_overrides_from_file(path) {
        Ok(overrides) => {
            overrides.apply(config);
            debug!(path = %path.display(), ?overrides, "Applied config file overrides");
            true
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to load config file");
            false
        }
    }
}

/// Coerce a JSON value to a port number.
///
/// Accepts integers, floats (truncated toward zero) and strings holding an
/// integer. Anything outside the `u16` range is rejected.
fn coerce_port(value: &Value) -> Option<u16> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                u16::try_from(i).ok()
            } else if let Some(u) = n.as_u64() {
                u16::try_from(u).ok()
            } else {
                let f = n.as_f64()?.trunc();
                (f.is_finite() && (0.0..=f64::from(u16::MAX)).contains(&f)).then_some(f as u16)
            }
        }
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
