use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use trio_common::{new_id, PaneSide, ProviderId};

/// One visited conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub provider: ProviderId,
    pub pane: PaneSide,
    pub url: String,
    pub title: String,
    /// Keep `title` as supplied by the site instead of deriving one.
    #[serde(default)]
    pub preserve_title: bool,
    pub visited_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(
        provider: ProviderId,
        pane: PaneSide,
        url: impl Into<String>,
        title: impl Into<String>,
        preserve_title: bool,
    ) -> Self {
        Self {
            id: new_id(),
            provider,
            pane,
            url: url.into(),
            title: title.into(),
            preserve_title,
            visited_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub id: String,
    pub provider: ProviderId,
    pub url: String,
    pub title: String,
    pub added_at: DateTime<Utc>,
}

impl FavoriteEntry {
    pub fn new(provider: ProviderId, url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            provider,
            url: url.into(),
            title: title.into(),
            added_at: Utc::now(),
        }
    }
}

/// User override applied on top of a built-in provider entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderOverride {
    pub id: ProviderId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_url: Option<String>,
}

/// A provider the user added by URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomProvider {
    pub id: ProviderId,
    pub label: String,
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_ref: Option<String>,
}

/// On-disk document layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreData {
    pub provider_order: Vec<ProviderId>,
    pub overrides: Vec<ProviderOverride>,
    pub custom_providers: Vec<CustomProvider>,
    pub history: Vec<HistoryEntry>,
    pub favorites: Vec<FavoriteEntry>,
}

impl StoreData {
    /// Append a history entry, collapsing consecutive visits to the same URL
    /// and dropping the oldest entries beyond `cap`.
    pub fn push_history(&mut self, entry: HistoryEntry, cap: usize) {
        match self.history.last_mut() {
            Some(last) if last.url == entry.url && last.pane == entry.pane => {
                if !entry.title.is_empty() {
                    last.title = entry.title;
                    last.preserve_title = entry.preserve_title;
                }
                last.visited_at = entry.visited_at;
            }
            _ => self.history.push(entry),
        }
        if self.history.len() > cap {
            let excess = self.history.len() - cap;
            self.history.drain(..excess);
        }
    }

    /// Retitle the newest entry for `url` in `pane`. Returns `true` if a
    /// title changed.
    pub fn retitle_history(&mut self, pane: PaneSide, url: &str, title: &str) -> bool {
        let Some(entry) = self
            .history
            .iter_mut()
            .rev()
            .find(|e| e.pane == pane && e.url == url)
        else {
            return false;
        };
        if entry.title == title {
            return false;
        }
        entry.title = title.to_string();
        true
    }

    /// Add a favorite unless one with the same URL exists. Returns `true` if added.
    pub fn push_favorite(&mut self, entry: FavoriteEntry) -> bool {
        if self.favorites.iter().any(|f| f.url == entry.url) {
            return false;
        }
        self.favorites.push(entry);
        true
    }
}
