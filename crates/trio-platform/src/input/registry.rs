use std::collections::HashMap;

use trio_common::{Action, CycleDirection, PaneSide};
use trio_config::schema::KeybindConfig;

use crate::keymap::{keybind_to_display, parse_keybind};

use super::key_combo::KeyCombo;

/// Maps key combinations to shell [`Action`]s.
pub struct KeybindRegistry {
    bindings: HashMap<KeyCombo, Action>,
}

impl KeybindRegistry {
    /// Build the registry from the `[keybinds]` config section.
    ///
    /// Unparseable bindings are logged and skipped.
    pub fn from_config(config: &KeybindConfig) -> Self {
        let mappings: [(&str, Action); 19] = [
            (&config.cycle_next, Action::Cycle(CycleDirection::Forward)),
            (&config.cycle_prev, Action::Cycle(CycleDirection::Backward)),
            (&config.exit_overlay, Action::ExitOverlay),
            (&config.toggle_overlay, Action::ToggleOverlay),
            (&config.toggle_align, Action::ToggleAlign),
            (&config.open_right, Action::OpenPane(PaneSide::Right)),
            (&config.open_third, Action::OpenPane(PaneSide::Third)),
            (&config.close_right, Action::ClosePane(PaneSide::Right)),
            (&config.close_third, Action::ClosePane(PaneSide::Third)),
            (&config.close_all, Action::CloseAllPanes),
            (&config.focus_left, Action::FocusPane(PaneSide::Left)),
            (&config.focus_right, Action::FocusPane(PaneSide::Right)),
            (&config.focus_third, Action::FocusPane(PaneSide::Third)),
            (&config.lock_right, Action::ToggleTabLock(PaneSide::Right)),
            (&config.lock_third, Action::ToggleTabLock(PaneSide::Third)),
            (&config.add_favorite, Action::AddFavorite),
            (&config.retry_pane, Action::RetryActivePane),
            (&config.toggle_sidebar_lock, Action::ToggleSidebarLock),
            (&config.quit, Action::Quit),
        ];

        let mut bindings = HashMap::new();
        for (binding_str, action) in mappings {
            match parse_keybind(binding_str) {
                Ok(kb) => {
                    bindings.insert(KeyCombo::from_keybind(&kb), action);
                }
                Err(e) => {
                    tracing::warn!("invalid keybind '{binding_str}': {e}");
                }
            }
        }

        Self { bindings }
    }

    pub fn lookup(&self, combo: &KeyCombo) -> Option<&Action> {
        self.bindings.get(combo)
    }

    /// Display string of the binding for `action`, for menu labels.
    pub fn keybind_for_action(&self, action: &Action) -> Option<String> {
        self.bindings
            .iter()
            .find(|(_, a)| *a == action)
            .map(|(combo, _)| keybind_to_display(&combo.to_keybind()))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
