//! Configuration schema types for Trio.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod keybind_config;
mod layout;
mod panes;
mod providers;
mod system;

pub use keybind_config::*;
pub use layout::*;
pub use panes::*;
pub use providers::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Trio.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TrioConfig {
    pub layout: LayoutConfig,
    pub panes: PaneSettings,
    pub keybinds: KeybindConfig,
    pub providers: ProvidersConfig,
    pub history: HistoryConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_sections() {
        let config = TrioConfig::default();
        assert_eq!(config.providers.default_left, "chatgpt");
        assert_eq!(config.keybinds.cycle_next, "Tab");
        assert_eq!(config.keybinds.cycle_prev, "Shift+Tab");
        assert_eq!(config.history.max_entries, 500);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config: TrioConfig = toml::from_str("").unwrap();
        assert!((config.panes.split_ratio - 0.5).abs() < f64::EPSILON);
        assert!((config.layout.gutter - 24.0).abs() < f64::EPSILON);
    }

    #[test]
    fn partial_sections_merge_with_defaults() {
        let toml_str = r#"
[panes]
three_split_r1 = 0.4
sidebar_width_lock = true

[logging]
level = "DEBUG"
"#;
        let config: TrioConfig = toml::from_str(toml_str).unwrap();
        assert!((config.panes.three_split_r1 - 0.4).abs() < f64::EPSILON);
        assert!(config.panes.sidebar_width_lock);
        assert!((config.panes.split_ratio - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.level.as_directive(), "debug");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config: TrioConfig = toml::from_str("[panes]\nmystery = 3").unwrap();
        assert!((config.panes.split_ratio - 0.5).abs() < f64::EPSILON);
    }
}
