use trio_common::{PaneSide, ProviderId, StorageError};

use super::{CustomProvider, FavoriteEntry, HistoryEntry, ProviderOverride, Storage, StoreData};

/// Non-persistent store. Can be switched to fail every call to exercise
/// the coordinator's degraded paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub data: StoreData,
    pub cap: usize,
    pub unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            data: StoreData::default(),
            cap: 500,
            unavailable: false,
        }
    }

    /// A store whose every call fails with `StorageError::Unavailable`.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::new()
        }
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.unavailable {
            Err(StorageError::Unavailable("memory store disabled".into()))
        } else {
            Ok(())
        }
    }
}

impl Storage for MemoryStore {
    fn ordered_provider_list(&self) -> Result<Vec<ProviderId>, StorageError> {
        self.check()?;
        Ok(self.data.provider_order.clone())
    }

    fn overrides(&self) -> Result<Vec<ProviderOverride>, StorageError> {
        self.check()?;
        Ok(self.data.overrides.clone())
    }

    fn custom_providers(&self) -> Result<Vec<CustomProvider>, StorageError> {
        self.check()?;
        Ok(self.data.custom_providers.clone())
    }

    fn add_history_entry(&mut self, entry: HistoryEntry) -> Result<(), StorageError> {
        self.check()?;
        let cap = self.cap.max(1);
        self.data.push_history(entry, cap);
        Ok(())
    }

    fn update_history_title(
        &mut self,
        pane: PaneSide,
        url: &str,
        title: &str,
    ) -> Result<bool, StorageError> {
        self.check()?;
        Ok(self.data.retitle_history(pane, url, title))
    }

    fn add_favorite(&mut self, entry: FavoriteEntry) -> Result<(), StorageError> {
        self.check()?;
        self.data.push_favorite(entry);
        Ok(())
    }

    fn favorites(&self) -> Result<Vec<FavoriteEntry>, StorageError> {
        self.check()?;
        Ok(self.data.favorites.clone())
    }
}
