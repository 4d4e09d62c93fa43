//! JSON-file backed [`Storage`].

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use trio_common::{PaneSide, ProviderId, StorageError};

use crate::atomic::write_atomic;

use super::{CustomProvider, FavoriteEntry, HistoryEntry, ProviderOverride, Storage, StoreData};

/// Keeps the whole document in memory and rewrites it atomically on every
/// mutation.
pub struct JsonStore {
    path: PathBuf,
    data: StoreData,
    history_cap: usize,
}

impl JsonStore {
    /// Open the store at `path`. A missing file starts empty.
    pub fn open(path: impl Into<PathBuf>, history_cap: usize) -> Result<Self, StorageError> {
        let path = path.into();
        let data = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            info!("no store at {}, starting empty", path.display());
            StoreData::default()
        };

        Ok(Self {
            path,
            data,
            history_cap: history_cap.max(1),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.data.history
    }

    fn flush(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(&self.data)?;
        write_atomic(&self.path, &json)?;
        debug!(path = %self.path.display(), "store flushed");
        Ok(())
    }
}

impl Storage for JsonStore {
    fn ordered_provider_list(&self) -> Result<Vec<ProviderId>, StorageError> {
        Ok(self.data.provider_order.clone())
    }

    fn overrides(&self) -> Result<Vec<ProviderOverride>, StorageError> {
        Ok(self.data.overrides.clone())
    }

    fn custom_providers(&self) -> Result<Vec<CustomProvider>, StorageError> {
        Ok(self.data.custom_providers.clone())
    }

    fn add_history_entry(&mut self, entry: HistoryEntry) -> Result<(), StorageError> {
        self.data.push_history(entry, self.history_cap);
        self.flush()
    }

    fn update_history_title(
        &mut self,
        pane: PaneSide,
        url: &str,
        title: &str,
    ) -> Result<bool, StorageError> {
        if !self.data.retitle_history(pane, url, title) {
            return Ok(false);
        }
        self.flush()?;
        Ok(true)
    }

    fn add_favorite(&mut self, entry: FavoriteEntry) -> Result<(), StorageError> {
        if self.data.push_favorite(entry) {
            self.flush()?;
        }
        Ok(())
    }

    fn favorites(&self) -> Result<Vec<FavoriteEntry>, StorageError> {
        Ok(self.data.favorites.clone())
    }
}
