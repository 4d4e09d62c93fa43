//! Full configuration validation.
//!
//! Validates numeric ranges and keybind uniqueness, collecting every
//! problem into a single `ConfigError`.

mod helpers;
mod layout;
mod panes;


use crate::keybinds;
use crate::schema::TrioConfig;
use trio_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TrioConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = keybinds::validate_no_duplicates(&config.keybinds) {
        errors.push(e.to_string());
    }

    layout::validate_layout(&mut errors, config);
    panes::validate_panes(&mut errors, config);
    panes::validate_history(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
