//! shellport configuration system.
//!
//! TOML-based configuration with validation. All config sections use
//! sensible defaults so partial configs work out of the box.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{ShellportConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use shellport_common::ConfigError;

/// A loaded config and the problems repaired while loading it.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: ShellportConfig,
    /// One entry per field that was reset to its default.
    pub repaired: Vec<String>,
}

/// Load config from the platform default path, or from `path` when given.
///
/// The default file is created when missing; an explicit path must exist.
/// Invalid fields are reset to their defaults and listed in `repaired`;
/// the rest of the file still applies.
pub fn load_config(path: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    let mut config = match path {
        Some(p) => toml_loader::load_from_path(p)?,
        None => toml_loader::load_default()?,
    };
    let repaired = validation::sanitize(&mut config);
    Ok(LoadedConfig { config, repaired })
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ShellportConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
