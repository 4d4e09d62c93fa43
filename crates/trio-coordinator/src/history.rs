//! Navigation -> history forwarding.
//!
//! `Left` is browsed casually, so only deep links into a conversation are
//! recorded there. Secondary panes are opened on purpose and every
//! navigation is recorded, keeping the title the site supplied verbatim.
//! A later title change rewrites the existing entry instead of adding one.

use tracing::{debug, warn};
use trio_common::PaneSide;
use trio_config::store::{HistoryEntry, Storage};

use crate::providers::url::host_of;
use crate::providers::Provider;

#[derive(Debug, Clone, Copy)]
pub struct HistoryBridge {
    enabled: bool,
}

impl Default for HistoryBridge {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl HistoryBridge {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// History entry for a navigation, or `None` when it should not be
    /// recorded. Only `http(s)` URLs qualify.
    pub fn entry_for(
        &self,
        side: PaneSide,
        provider: &Provider,
        url: &str,
        title: Option<&str>,
    ) -> Option<HistoryEntry> {
        if !self.enabled || host_of(url).is_none() {
            return None;
        }
        if side.is_secondary() {
            let raw = title.unwrap_or("").trim();
            return Some(HistoryEntry::new(provider.id.clone(), side, url, raw, true));
        }
        let title = provider.normalize_title(title.unwrap_or(""));
        if provider.is_deep_link(url) {
            Some(HistoryEntry::new(provider.id.clone(), side, url, title, false))
        } else {
            None
        }
    }

    /// Forward a navigation to storage. Storage failures are logged and
    /// swallowed. Returns `true` if an entry was stored.
    pub fn record(
        &self,
        store: &mut dyn Storage,
        side: PaneSide,
        provider: &Provider,
        url: &str,
        title: Option<&str>,
    ) -> bool {
        let Some(entry) = self.entry_for(side, provider, url, title) else {
            debug!(pane = %side, provider = %provider.id, url, "navigation not recorded");
            return false;
        };
        match store.add_history_entry(entry) {
            Ok(()) => true,
            Err(e) => {
                warn!(pane = %side, provider = %provider.id, error = %e, "history entry dropped");
                false
            }
        }
    }

    /// Apply a late page title to the entry already stored for `url`.
    /// Never adds an entry. Returns `true` if a stored title changed.
    pub fn retitle(
        &self,
        store: &mut dyn Storage,
        side: PaneSide,
        provider: &Provider,
        url: &str,
        title: &str,
    ) -> bool {
        let Some(entry) = self.entry_for(side, provider, url, Some(title)) else {
            return false;
        };
        match store.update_history_title(side, url, &entry.title) {
            Ok(changed) => changed,
            Err(e) => {
                warn!(pane = %side, provider = %provider.id, error = %e, "history title not updated");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ProviderRegistry;
    use trio_common::ProviderId;
    use trio_config::store::MemoryStore;

    const CLAUDE_CHAT: &str = "https://claude.ai/chat/6f1c2a9e-1234-4bcd-9ef0-aa11bb22cc33";

    fn claude() -> Provider {
        ProviderRegistry::builtin()
            .resolve(&ProviderId::from("claude"))
            .unwrap()
    }

    #[test]
    fn left_records_only_deep_links() {
        let bridge = HistoryBridge::default();
        let mut store = MemoryStore::new();

        assert!(!bridge.record(&mut store, PaneSide::Left, &claude(), "https://claude.ai/new", None));
        assert!(bridge.record(
            &mut store,
            PaneSide::Left,
            &claude(),
            CLAUDE_CHAT,
            Some("Borrow checker - Claude"),
        ));

        assert_eq!(store.data.history.len(), 1);
        let entry = &store.data.history[0];
        assert_eq!(entry.title, "Borrow checker");
        assert!(!entry.preserve_title);
        assert_eq!(entry.pane, PaneSide::Left);
    }

    #[test]
    fn secondary_panes_record_everything_with_preserved_titles() {
        let bridge = HistoryBridge::default();
        let mut store = MemoryStore::new();

        assert!(bridge.record(
            &mut store,
            PaneSide::Right,
            &claude(),
            "https://claude.ai/new",
            Some("Trip plan - Claude"),
        ));
        let entry = &store.data.history[0];
        assert!(entry.preserve_title);
        assert_eq!(entry.pane, PaneSide::Right);
        assert_eq!(entry.title, "Trip plan - Claude");
    }

    #[test]
    fn untitled_secondary_entries_stay_empty() {
        let bridge = HistoryBridge::default();
        let entry = bridge
            .entry_for(PaneSide::Third, &claude(), "https://claude.ai/new", None)
            .unwrap();
        assert_eq!(entry.title, "");
    }

    #[test]
    fn retitle_rewrites_without_adding() {
        let bridge = HistoryBridge::default();
        let mut store = MemoryStore::new();
        bridge.record(&mut store, PaneSide::Left, &claude(), CLAUDE_CHAT, None);
        assert_eq!(store.data.history[0].title, "Claude");

        assert!(bridge.retitle(&mut store, PaneSide::Left, &claude(), CLAUDE_CHAT, "Lifetimes - Claude"));
        assert!(!bridge.retitle(&mut store, PaneSide::Left, &claude(), CLAUDE_CHAT, "Lifetimes - Claude"));
        assert!(!bridge.retitle(&mut store, PaneSide::Left, &claude(), "https://claude.ai/new", "New chat"));
        assert_eq!(store.data.history.len(), 1);
        assert_eq!(store.data.history[0].title, "Lifetimes");
    }

    #[test]
    fn untitled_entries_use_the_label() {
        let bridge = HistoryBridge::default();
        let entry = bridge
            .entry_for(PaneSide::Left, &claude(), CLAUDE_CHAT, None)
            .unwrap();
        assert_eq!(entry.title, "Claude");
    }

    #[test]
    fn non_http_urls_are_ignored() {
        let bridge = HistoryBridge::default();
        assert!(bridge
            .entry_for(PaneSide::Third, &claude(), "about:blank", None)
            .is_none());
    }

    #[test]
    fn disabled_bridge_records_nothing() {
        let bridge = HistoryBridge::new(false);
        let mut store = MemoryStore::new();
        assert!(!bridge.record(&mut store, PaneSide::Right, &claude(), CLAUDE_CHAT, None));
        assert!(store.data.history.is_empty());
    }

    #[test]
    fn storage_failure_is_swallowed() {
        let bridge = HistoryBridge::default();
        let mut store = MemoryStore::unavailable();
        assert!(!bridge.record(&mut store, PaneSide::Left, &claude(), CLAUDE_CHAT, None));
    }
}
