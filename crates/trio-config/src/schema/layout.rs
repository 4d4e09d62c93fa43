//! Pane geometry configuration.

use serde::{Deserialize, Serialize};

/// Pixel constants fed to the geometry engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Minimum width of any visible pane (valid range: 120-800).
    pub min_pane_width: f64,
    /// Width of the draggable gutter between panes (valid range: 0-64).
    pub gutter: f64,
    /// Initial sidebar width before the host reports one (valid range: 0-400).
    pub sidebar_width: f64,
    /// Horizontal inset of each pane's address input (valid range: 0-64).
    pub address_inset: f64,
    /// Height of the address row above each surface (valid range: 0-120).
    pub address_bar_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_pane_width: 200.0,
            gutter: 24.0,
            sidebar_width: 60.0,
            address_inset: 8.0,
            address_bar_height: 36.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_config_defaults() {
        let config = LayoutConfig::default();
        assert!((config.min_pane_width - 200.0).abs() < f64::EPSILON);
        assert!((config.gutter - 24.0).abs() < f64::EPSILON);
        assert!((config.sidebar_width - 60.0).abs() < f64::EPSILON);
        assert!((config.address_inset - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn layout_config_partial_toml() {
        let toml_str = r#"
gutter = 12.0
min_pane_width = 320.0
"#;
        let config: LayoutConfig = toml::from_str(toml_str).unwrap();
        assert!((config.gutter - 12.0).abs() < f64::EPSILON);
        assert!((config.min_pane_width - 320.0).abs() < f64::EPSILON);
        // Defaults preserved
        assert!((config.sidebar_width - 60.0).abs() < f64::EPSILON);
    }
}
