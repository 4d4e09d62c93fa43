//! Trio configuration system.
//!
//! Provides TOML-based settings with validation, the persisted pane
//! settings sink, and the JSON store for history, favorites and provider
//! ordering. All config sections use defaults so partial configs work.

mod atomic;
pub mod keybinds;
pub mod schema;
pub mod settings;
pub mod store;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

pub use schema::{TrioConfig, CONFIG_SCHEMA_VERSION};
pub use settings::{MemorySettings, SettingsSink, TomlSettings};
pub use store::{JsonStore, MemoryStore, Storage};
pub use toml_writer::save_config_to_path;

use trio_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Creates a default `config.toml` if none exists.
pub fn load_config() -> Result<TrioConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
pub fn load_config_from(path: &std::path::Path) -> Result<TrioConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &TrioConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
