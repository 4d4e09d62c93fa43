//! Write TrioConfig to TOML on disk.
//!
//! Writes go through [`write_atomic`] so a crash mid-write never leaves a
//! truncated config behind.

use std::path::Path;

use trio_common::ConfigError;

use crate::atomic::write_atomic;
use crate::schema::TrioConfig;

/// Write config to `path`, creating parent directories if needed.
pub fn save_config_to_path(config: &TrioConfig, path: &Path) -> Result<(), ConfigError> {
    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config to TOML: {e}")))?;

    write_atomic(path, &toml_str).map_err(|e| {
        ConfigError::ParseError(format!("failed to write config to {}: {e}", path.display()))
    })?;

    tracing::debug!(path = %path.display(), "Config saved to disk");
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
