//! History, favorites and provider-order storage.
//!
//! The coordinator only sees the [`Storage`] trait; [`JsonStore`] keeps
//! everything in one JSON document under the platform data directory and
//! [`MemoryStore`] serves headless runs and tests.

mod json_store;
mod memory;
mod types;

pub use json_store::JsonStore;
pub use memory::MemoryStore;
pub use types::*;

use trio_common::{PaneSide, ProviderId, StorageError};

/// Persistent collaborator behind history, favorites and provider ordering.
pub trait Storage {
    /// User-chosen provider display order. May reference unknown ids.
    fn ordered_provider_list(&self) -> Result<Vec<ProviderId>, StorageError>;
    /// Per-provider overrides of label / home URL.
    fn overrides(&self) -> Result<Vec<ProviderOverride>, StorageError>;
    /// Providers added by the user at runtime.
    fn custom_providers(&self) -> Result<Vec<CustomProvider>, StorageError>;
    fn add_history_entry(&mut self, entry: HistoryEntry) -> Result<(), StorageError>;
    /// Replace the title of the newest entry for `url` in `pane`. Returns
    /// `false` when no such entry exists or the title is unchanged.
    fn update_history_title(
        &mut self,
        pane: PaneSide,
        url: &str,
        title: &str,
    ) -> Result<bool, StorageError>;
    fn add_favorite(&mut self, entry: FavoriteEntry) -> Result<(), StorageError>;
    fn favorites(&self) -> Result<Vec<FavoriteEntry>, StorageError>;
}
