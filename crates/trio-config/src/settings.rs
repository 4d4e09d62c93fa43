//! Persistence of the `[panes]` section on behalf of the coordinator.

use std::path::PathBuf;

use trio_common::ConfigError;

use crate::schema::{PaneSettings, TrioConfig};
use crate::toml_writer::save_config_to_path;

/// Destination for pane settings written after a drag or tab-lock change.
pub trait SettingsSink {
    fn persist(&mut self, settings: &PaneSettings) -> Result<(), ConfigError>;
}

/// Writes pane settings back into the full TOML config file, leaving the
/// other sections untouched.
pub struct TomlSettings {
    path: PathBuf,
    config: TrioConfig,
}

impl TomlSettings {
    pub fn new(path: PathBuf, config: TrioConfig) -> Self {
        Self { path, config }
    }
}

impl SettingsSink for TomlSettings {
    fn persist(&mut self, settings: &PaneSettings) -> Result<(), ConfigError> {
        if self.config.panes == *settings {
            return Ok(());
        }
        self.config.panes = settings.clone();
        save_config_to_path(&self.config, &self.path)
    }
}

/// Keeps the last persisted settings in memory. Used headless and in tests.
#[derive(Debug, Default)]
pub struct MemorySettings {
    pub saved: Option<PaneSettings>,
    pub writes: usize,
}

impl SettingsSink for MemorySettings {
    fn persist(&mut self, settings: &PaneSettings) -> Result<(), ConfigError> {
        self.saved = Some(settings.clone());
        self.writes += 1;
        Ok(())
    }
}
