//! Persisted pane settings: split ratios, tab lock, sidebar lock.

use serde::{Deserialize, Serialize};
use trio_common::PaneSide;

/// Settings the coordinator writes back when the user drags a divider
/// or toggles the tab lock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaneSettings {
    /// Two-pane split ratio (valid range: 0.2-0.8).
    pub split_ratio: f64,
    /// Three-pane share of the left pane (valid range: 0.0-1.0).
    pub three_split_r1: f64,
    /// Three-pane share of the middle pane (valid range: 0.0-1.0).
    pub three_split_r2: f64,
    /// Pane that Tab/Shift+Tab cycles regardless of focus: "right" or "third".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_lock_side: Option<String>,
    /// Ignore sidebar width reports from the host.
    pub sidebar_width_lock: bool,
}

impl Default for PaneSettings {
    fn default() -> Self {
        Self {
            split_ratio: 0.5,
            three_split_r1: 1.0 / 3.0,
            three_split_r2: 1.0 / 3.0,
            tab_lock_side: None,
            sidebar_width_lock: false,
        }
    }
}

impl PaneSettings {
    /// Parsed tab-lock target. Unknown strings and `left` read as no lock.
    pub fn tab_lock(&self) -> Option<PaneSide> {
        self.tab_lock_side
            .as_deref()
            .and_then(PaneSide::parse)
            .filter(PaneSide::is_secondary)
    }

    pub fn set_tab_lock(&mut self, side: Option<PaneSide>) {
        self.tab_lock_side = side.map(|s| s.as_str().to_string());
    }
}
