//! Keybind validation utilities.

use crate::schema::KeybindConfig;
use std::collections::HashMap;
use trio_common::ConfigError;

/// Returns all keybinds as `(name, binding)` pairs.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(&str, &str)> {
    vec![
        ("cycle_next", &config.cycle_next),
        ("cycle_prev", &config.cycle_prev),
        ("exit_overlay", &config.exit_overlay),
        ("toggle_overlay", &config.toggle_overlay),
        ("toggle_align", &config.toggle_align),
        ("open_right", &config.open_right),
        ("open_third", &config.open_third),
        ("close_right", &config.close_right),
        ("close_third", &config.close_third),
        ("close_all", &config.close_all),
        ("focus_left", &config.focus_left),
        ("focus_right", &config.focus_right),
        ("focus_third", &config.focus_third),
        ("lock_right", &config.lock_right),
        ("lock_third", &config.lock_third),
        ("add_favorite", &config.add_favorite),
        ("retry_pane", &config.retry_pane),
        ("toggle_sidebar_lock", &config.toggle_sidebar_lock),
        ("quit", &config.quit),
    ]
}

/// Validate that no two keybinds are mapped to the same key combination.
pub fn validate_no_duplicates(config: &KeybindConfig) -> Result<(), ConfigError> {
    let binds = all_keybinds(config);
    let mut seen: HashMap<&str, &str> = HashMap::new();

    for (name, binding) in &binds {
        if let Some(existing_name) = seen.get(binding) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate keybind '{binding}': assigned to both '{existing_name}' and '{name}'"
            )));
        }
        seen.insert(binding, name);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keybinds_have_no_duplicates() {
        let config = KeybindConfig::default();
        assert!(validate_no_duplicates(&config).is_ok());
    }

    #[test]
    fn all_keybinds_returns_19_entries() {
        let config = KeybindConfig::default();
        assert_eq!(all_keybinds(&config).len(), 19);
    }

    #[test]
    fn detects_duplicate_keybinds() {
        let config = KeybindConfig {
            toggle_overlay: "Escape".into(), // same as exit_overlay
            ..Default::default()
        };
        let err = validate_no_duplicates(&config).unwrap_err().to_string();
        assert!(err.contains("duplicate keybind"));
        assert!(err.contains("Escape"));
    }
}
