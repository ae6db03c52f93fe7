//! Startup override pass
//!
//! Overrides are resolved once, in order, and the first matching source wins:
//! 1. `UNITY_MCP_PORT` environment variable
//! 2. File named by `UNITY_MCP_CONFIG`
//! 3. `config.json` next to the executable
//! 4. Default values
//!
//! An unparsable `UNITY_MCP_PORT` is reported and skipped; lookup continues
//! with the config files.

use crate::config::file::apply_file_overrides;
use crate::config::types::{FrozenConfig, ServerConfig};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable overriding the Unity port directly
pub const PORT_ENV_VAR: &str = "UNITY_MCP_PORT";

/// Environment variable naming a JSON config file
pub const CONFIG_ENV_VAR: &str = "UNITY_MCP_CONFIG";

/// File name looked up next to the executable
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Inputs to the override pass
#[derive(Debug, Clone, Default)]
pub struct OverrideSources {
    /// Raw value of `UNITY_MCP_PORT`
    pub port: Option<String>,

    /// Value of `UNITY_MCP_CONFIG`
    pub config_path: Option<PathBuf>,

    /// Fallback file location, if one can be determined
    pub default_path: Option<PathBuf>,
}

impl OverrideSources {
    /// Capture sources from the process environment.
    ///
    /// Empty variables are treated as unset.
    pub fn from_env() -> Self {
        Self {
            port: std::env::var(PORT_ENV_VAR).ok().filter(|v| !v.is_empty()),
            config_path: std::env::var_os(CONFIG_ENV_VAR)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            default_path: default_config_path(),
        }
    }
}

/// Source that supplied the final Unity port
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverrideSource {
    /// `UNITY_MCP_PORT` supplied the port
    EnvPort(u16),

    /// A config file was consulted
    File { path: PathBuf, applied: bool },

    /// No override source was present
    Defaults,
}

/// Result of the override pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideOutcome {
    /// Where the pass ended
    pub source: OverrideSource,

    /// `UNITY_MCP_PORT` value that could not be parsed, if any
    pub rejected_env_port: Option<String>,
}

/// Apply environment and file overrides to `config`.
pub fn apply_environment_overrides(
    config: &mut ServerConfig,
    sources: &OverrideSources,
) -> OverrideOutcome {
    let mut rejected_env_port = None;

    if let Some(raw) = sources.port.as_deref() {
        match raw.trim().parse::<u16>() {
            Ok(port) => {
                config.remote_port = port;
                return OverrideOutcome {
                    source: OverrideSource::EnvPort(port),
                    rejected_env_port,
                };
            }
            Err(e) => {
                warn!(value = raw, error = %e, "Invalid {} value", PORT_ENV_VAR);
                rejected_env_port = Some(raw.to_string());
            }
        }
    }

    // An explicit path that does not exist falls back to the default file
    let path = sources
        .config_path
        .as_deref()
        .filter(|p| p.exists())
        .or_else(|| sources.default_path.as_deref().filter(|p| p.exists()));

    let source = match path {
        Some(path) => OverrideSource::File {
            path: path.to_path_buf(),
            applied: apply_file_overrides(config, path),
        },
        None => OverrideSource::Defaults,
    };

    OverrideOutcome {
        source,
        rejected_env_port,
    }
}

/// Build the process configuration from the real environment.
///
/// Must be called once, before any component that reads the configuration
/// is constructed.
pub fn initialize_configuration() -> FrozenConfig {
    initialize_configuration_with(&OverrideSources::from_env())
}

/// Build the process configuration from explicit override sources.
pub fn initialize_configuration_with(sources: &OverrideSources) -> FrozenConfig {
    let mut config = ServerConfig::default();
    let outcome = apply_environment_overrides(&mut config, sources);

    match &outcome.source {
        OverrideSource::EnvPort(port) => {
            info!(port, "Unity port set from {}", PORT_ENV_VAR)
        }
        OverrideSource::File { path, applied } => {
            info!(path = %path.display(), applied, "Consulted config file")
        }
        OverrideSource::Defaults => info!("Using default Unity port"),
    }

    config.freeze()
}

/// `config.json` in the directory of the running executable
fn default_config_path() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    exe.parent().map(default_config_path_in)
}

/// Log the result of loading a `.env` file.
///
/// A missing file is expected and stays silent. Returns whether a warning was
/// emitted.
pub fn report_dotenv<T>(result: Result<T, dotenvy::Error>) -> bool {
    match result {
        Ok(_) => false,
        Err(e) if e.not_found() => false,
        Err(e) => {
            warn!(error = %e, "Failed to load .env file");
            true
        }
    }
}

/// Default file location inside `dir`
pub fn default_config_path_in(dir: &Path) -> PathBuf {
    dir.join(DEFAULT_CONFIG_FILE)
}
