//! Keyboard shortcuts configuration types.
//!
//! Named `keybind_config` to avoid clash with the crate-level `keybinds` module.

use serde::{Deserialize, Serialize};

/// Keyboard shortcuts configuration.
///
/// Format: "Modifier+Key" where Modifier is one of: Cmd, Option, Control, Shift.
/// Multiple modifiers: "Cmd+Shift+K".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub cycle_next: String,
    pub cycle_prev: String,
    pub exit_overlay: String,
    pub toggle_overlay: String,
    pub toggle_align: String,
    pub open_right: String,
    pub open_third: String,
    pub close_right: String,
    pub close_third: String,
    pub close_all: String,
    pub focus_left: String,
    pub focus_right: String,
    pub focus_third: String,
    pub lock_right: String,
    pub lock_third: String,
    pub add_favorite: String,
    pub retry_pane: String,
    pub toggle_sidebar_lock: String,
    pub quit: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            cycle_next: "Tab".into(),
            cycle_prev: "Shift+Tab".into(),
            exit_overlay: "Escape".into(),
            toggle_overlay: "Cmd+K".into(),
            toggle_align: "Cmd+Shift+A".into(),
            open_right: "Cmd+Shift+R".into(),
            open_third: "Cmd+Shift+T".into(),
            close_right: "Cmd+Option+R".into(),
            close_third: "Cmd+Option+T".into(),
            close_all: "Cmd+Shift+W".into(),
            focus_left: "Cmd+1".into(),
            focus_right: "Cmd+2".into(),
            focus_third: "Cmd+3".into(),
            lock_right: "Cmd+Option+2".into(),
            lock_third: "Cmd+Option+3".into(),
            add_favorite: "Cmd+D".into(),
            retry_pane: "Cmd+R".into(),
            toggle_sidebar_lock: "Cmd+Shift+L".into(),
            quit: "Cmd+Q".into(),
        }
    }
}
