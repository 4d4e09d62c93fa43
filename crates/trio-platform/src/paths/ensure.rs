use std::fs;

use trio_common::PlatformError;

use super::resolve::{config_dir, data_dir};

/// Create the config and data directories if missing.
pub fn ensure_dirs() -> Result<(), PlatformError> {
    for dir in [config_dir()?, data_dir()?] {
        fs::create_dir_all(&dir).map_err(|e| {
            PlatformError::PathError(format!("cannot create {}: {e}", dir.display()))
        })?;
    }
    Ok(())
}
