//! Overlay panels, tab lock and align mode.

use tracing::{debug, warn};
use trio_common::{PaneSide, UiEvent};
use trio_tiling::{OverlayTransition, SplitRatios};
use trio_webview::SurfaceHost;

use super::core::Coordinator;

impl<H: SurfaceHost> Coordinator<H> {
    /// Push an overlay. The first one hides every surface so panels can
    /// draw above the panes. Returns the new depth.
    pub fn enter_overlay(&mut self) -> u32 {
        if self.panes.enter_overlay() == OverlayTransition::DetachAll {
            self.divider.cancel();
            self.cache.detach_all(&mut self.host);
            if let Err(e) = self.host.enter_overlay() {
                warn!(error = %e, "host did not enter overlay");
            }
        }
        let depth = self.panes.overlay_depth();
        debug!(depth, "overlay entered");
        self.publish(UiEvent::OverlayChanged { depth });
        depth
    }

    /// Pop an overlay. Leaving the last one shows the surfaces again.
    /// A no-op at depth 0. Returns the new depth.
    pub fn exit_overlay(&mut self) -> u32 {
        match self.panes.exit_overlay() {
            OverlayTransition::Unchanged => return 0,
            OverlayTransition::ReattachAll => {
                if let Err(e) = self.host.exit_overlay() {
                    warn!(error = %e, "host did not exit overlay");
                }
                self.cache.reattach_all(&mut self.host);
                self.resize_surfaces();
                self.focus_host(self.panes.active_side());
            }
            OverlayTransition::DetachAll | OverlayTransition::Nested(_) => {}
        }
        let depth = self.panes.overlay_depth();
        debug!(depth, "overlay exited");
        self.publish(UiEvent::OverlayChanged { depth });
        depth
    }

    /// Exit one overlay level if any is open, else enter one.
    pub fn toggle_overlay(&mut self) -> u32 {
        if self.panes.in_overlay() {
            self.exit_overlay()
        } else {
            self.enter_overlay()
        }
    }

    /// Latch the tab lock on `side` (again to release; `Left` releases).
    /// The result is persisted.
    pub fn toggle_tab_lock(&mut self, side: PaneSide) -> Option<PaneSide> {
        let lock = self.panes.set_tab_lock(side);
        debug!(?lock, "tab lock changed");
        self.pane_settings.set_tab_lock(lock);
        self.persist_settings();
        self.publish(UiEvent::TabLockChanged(lock));
        lock
    }

    /// Snap to equal shares, or restore the ratios from before. Align mode
    /// is not persisted.
    pub fn toggle_align(&mut self) -> bool {
        let aligned = match self.align_backup.take() {
            Some(previous) => {
                self.ratios = previous;
                false
            }
            None => {
                self.align_backup = Some(self.ratios);
                self.ratios = SplitRatios::equal();
                true
            }
        };
        self.relayout();
        self.publish(UiEvent::AlignChanged(aligned));
        aligned
    }
}
