//! Surface navigation, history and favorites.

use tracing::{debug, trace, warn};
use trio_common::{PaneSide, ProviderId};
use trio_config::store::FavoriteEntry;
use trio_webview::{PageLoadState, SurfaceEvent, SurfaceHost};

use super::core::Coordinator;

impl<H: SurfaceHost> Coordinator<H> {
    /// Navigation in the surface currently shown by `side`. Returns `true`
    /// if a history entry was stored.
    pub fn on_navigation(&mut self, side: PaneSide, url: &str, title: Option<&str>) -> bool {
        let Some(provider) = self.provider(side).cloned() else {
            return false;
        };
        self.on_surface_navigation(side, &provider, url, title)
    }

    /// Navigation reported by `provider`'s surface in `side`. The surface
    /// may be a hidden one; only the shown provider updates the pane.
    pub fn on_surface_navigation(
        &mut self,
        side: PaneSide,
        provider: &ProviderId,
        url: &str,
        title: Option<&str>,
    ) -> bool {
        self.cache.record_navigation(side, provider, url);
        if self.provider(side) == Some(provider) {
            self.panes.record_navigation(side, url, title);
        }
        let Some(entry) = self.registry.resolve(provider) else {
            return false;
        };
        self.history
            .record(self.store.as_mut(), side, &entry, url, title)
    }

    /// Page title changed. Updates the pane and retitles the history entry
    /// for the last URL; no new entry is stored. Returns `true` if a stored
    /// title changed.
    pub fn on_title_changed(&mut self, side: PaneSide, provider: &ProviderId, title: &str) -> bool {
        let Some(url) = self.cache.last_url(side, provider).map(str::to_string) else {
            return false;
        };
        if self.provider(side) == Some(provider) {
            self.panes.record_navigation(side, &url, Some(title));
        }
        let Some(entry) = self.registry.resolve(provider) else {
            return false;
        };
        self.history
            .retitle(self.store.as_mut(), side, &entry, &url, title)
    }

    /// Route an event drained from the host.
    pub fn on_surface_event(&mut self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::PageLoad {
                side,
                provider,
                state: PageLoadState::Finished,
                url,
            } => {
                self.on_surface_navigation(side, &provider, &url, None);
            }
            SurfaceEvent::PageLoad { .. } => {}
            SurfaceEvent::TitleChanged {
                side,
                provider,
                title,
            } => {
                self.on_title_changed(side, &provider, &title);
            }
            SurfaceEvent::NavigationRequested { side, url, .. } => {
                trace!(pane = %side, url, "navigation requested");
            }
        }
    }

    /// Save `side`'s current page as a favorite. Returns `true` if stored.
    pub fn add_favorite(&mut self, side: PaneSide) -> bool {
        let pane = self.panes.pane(side);
        let (Some(provider), Some(url)) = (pane.active_provider.clone(), pane.last_known_url.clone())
        else {
            debug!(pane = %side, "nothing to favorite");
            return false;
        };
        let raw_title = pane.last_known_title.clone().unwrap_or_default();
        let title = match self.registry.resolve(&provider) {
            Some(entry) => entry.normalize_title(&raw_title),
            None => raw_title,
        };

        match self.store.add_favorite(FavoriteEntry::new(provider, url, title)) {
            Ok(()) => true,
            Err(e) => {
                warn!(pane = %side, error = %e, "favorite not saved");
                false
            }
        }
    }

    /// Stored favorites; empty when storage is unavailable.
    pub fn favorites(&self) -> Vec<FavoriteEntry> {
        self.store.favorites().unwrap_or_else(|e| {
            warn!(error = %e, "favorites unavailable");
            Vec::new()
        })
    }
}
