//! Action dispatch: routes resolved actions to coordinator operations.

use trio_common::{Action, PaneSide, ProviderId};
use trio_webview::SurfaceHost;

use super::core::Coordinator;

impl<H: SurfaceHost> Coordinator<H> {
    /// Apply a keybind or menu [`Action`]. Returns `false` when the action
    /// was not consumed and the input should pass through (e.g. `Escape`
    /// with no overlay open, `Tab` under an overlay, or `Quit`).
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::OpenPane(side) => {
                self.open_pane(side, None);
                self.set_active_side(side);
                true
            }
            Action::ClosePane(side) => self.close_pane(side),
            Action::CloseAllPanes => !self.close_all().is_empty(),
            Action::FocusPane(side) => {
                self.set_active_side(side);
                true
            }
            Action::ToggleTabLock(side) => {
                self.toggle_tab_lock(side);
                true
            }
            Action::Cycle(direction) => {
                if self.panes.in_overlay() {
                    return false;
                }
                self.cycle(direction).is_some()
            }
            Action::SelectProvider { pane, provider } => {
                let provider = ProviderId::from(provider);
                if pane.is_secondary() && !self.panes.is_open(pane) {
                    self.open_pane(pane, Some(provider));
                    true
                } else {
                    self.select_provider(pane, provider)
                }
            }
            Action::RetryPane(side) => self.retry(side),
            Action::RetryActivePane => {
                let side = self.panes.active_side();
                self.retry(side)
            }
            Action::AddFavorite => {
                let side = self.panes.active_side();
                self.add_favorite(side)
            }
            Action::ToggleOverlay => {
                self.toggle_overlay();
                true
            }
            Action::ExitOverlay => {
                if !self.panes.in_overlay() {
                    return false;
                }
                self.exit_overlay();
                true
            }
            Action::ToggleAlign => {
                self.toggle_align();
                true
            }
            Action::ToggleSidebarLock => {
                let locked = !self.is_sidebar_locked();
                self.set_sidebar_lock(locked);
                true
            }
            Action::Quit | Action::None => false,
        }
    }

    /// Active pane, for callers that only need to know where input goes.
    pub fn active_side(&self) -> PaneSide {
        self.panes.active_side()
    }
}
