//! Crash-safe file replacement shared by the config writer and the store.

use std::io;
use std::path::Path;

/// Write `contents` to `path` through a sibling `.tmp` file and a rename,
/// creating parent directories as needed.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let ext = path
        .extension()
        .map(|e| format!("{}.tmp", e.to_string_lossy()))
        .unwrap_or_else(|| "tmp".to_string());
    let tmp_path = path.with_extension(ext);
    std::fs::write(&tmp_path, contents)?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        // Windows cannot rename over an existing file in every case
        tracing::warn!("atomic rename failed ({e}), falling back to direct write");
        std::fs::write(path, contents)?;
        let _ = std::fs::remove_file(&tmp_path);
    }
    Ok(())
}
