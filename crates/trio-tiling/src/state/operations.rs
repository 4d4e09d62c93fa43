//! Open / close transitions.

use trio_common::{PaneSide, ProviderId};

use super::PaneStateMachine;

impl PaneStateMachine {
    /// Mark `side` open and record its provider. Does not activate it.
    ///
    /// Returns `true` if the pane was previously closed.
    pub fn open(&mut self, side: PaneSide, provider: ProviderId) -> bool {
        let pane = self.pane_mut(side);
        let was_open = pane.is_open;
        pane.is_open = true;
        pane.active_provider = Some(provider);
        !was_open
    }

    /// Close a secondary pane and forget its cached content. If it was the
    /// active pane, focus falls back to the other open secondary pane, or
    /// to `Left` when none remains. `Left` cannot be closed.
    ///
    /// Returns `true` if the pane was open.
    pub fn close(&mut self, side: PaneSide) -> bool {
        if !side.is_secondary() || !self.is_open(side) {
            return false;
        }

        let pane = self.pane_mut(side);
        pane.is_open = false;
        pane.clear();

        if self.focus.active_side == side {
            self.focus.active_side = side
                .sibling()
                .filter(|s| self.is_open(*s))
                .unwrap_or(PaneSide::Left);
            tracing::debug!(closed = %side, active = %self.focus.active_side, "active pane closed");
        }
        true
    }

    /// Close both secondary panes. Returns the sides that were open.
    pub fn close_all(&mut self) -> Vec<PaneSide> {
        [PaneSide::Right, PaneSide::Third]
            .into_iter()
            .filter(|side| self.close(*side))
            .collect()
    }

    /// Record the last URL / title the pane navigated to.
    pub fn record_navigation(&mut self, side: PaneSide, url: &str, title: Option<&str>) {
        let pane = self.pane_mut(side);
        pane.last_known_url = Some(url.to_string());
        if let Some(title) = title {
            pane.last_known_title = Some(title.to_string());
        }
    }
}
