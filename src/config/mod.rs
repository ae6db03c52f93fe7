//! Configuration module
//!
//! Builds the process configuration from defaults, environment variables and
//! an optional JSON override file.

pub mod file;
pub mod loader;
pub mod types;

pub use file::{FileOverrides, apply_file_overrides, load_overrides_from_file};
pub use loader::{
    OverrideOutcome, OverrideSource, OverrideSources, apply_environment_overrides,
    initialize_configuration, initialize_configuration_with,
};
pub use types::*;
