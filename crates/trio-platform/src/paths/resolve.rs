use std::path::PathBuf;

use trio_common::PlatformError;

pub(super) const APP_NAME: &str = "trio";

/// Platform configuration directory for Trio.
///
/// - macOS: `~/Library/Application Support/trio`
/// - Linux: `$XDG_CONFIG_HOME/trio` (defaults to `~/.config/trio`)
/// - Windows: `%APPDATA%\trio`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Platform data directory for Trio, home of the history store.
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

pub fn config_file() -> Result<PathBuf, PlatformError> {
    Ok(config_dir()?.join("config.toml"))
}

pub fn store_file() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("store.json"))
}
