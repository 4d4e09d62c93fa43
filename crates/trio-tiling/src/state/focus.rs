//! Focus, tab lock and overlay transitions.

use trio_common::PaneSide;

use super::{OverlayTransition, PaneStateMachine};

impl PaneStateMachine {
    /// Make `side` active. Only `Left` or an open pane is accepted.
    pub fn set_active_side(&mut self, side: PaneSide) -> bool {
        if !self.is_open(side) {
            return false;
        }
        self.focus.active_side = side;
        true
    }

    /// Latch the tab lock on `target`. Applying the current target again,
    /// or targeting `Left`, clears it. Returns the new lock.
    pub fn set_tab_lock(&mut self, target: PaneSide) -> Option<PaneSide> {
        self.focus.tab_lock = match self.focus.tab_lock {
            Some(current) if current == target => None,
            _ if !target.is_secondary() => None,
            _ => Some(target),
        };
        self.focus.tab_lock
    }

    /// Restore a persisted lock without latching.
    pub fn restore_tab_lock(&mut self, lock: Option<PaneSide>) {
        self.focus.tab_lock = lock.filter(PaneSide::is_secondary);
    }

    /// Pane that Tab / Shift+Tab cycles: the tab lock when its pane is
    /// open, else the active pane.
    pub fn cycle_target(&self) -> PaneSide {
        match self.focus.tab_lock {
            Some(locked) if self.is_open(locked) => locked,
            _ => self.focus.active_side,
        }
    }

    pub fn enter_overlay(&mut self) -> OverlayTransition {
        self.focus.overlay_depth = self.focus.overlay_depth.saturating_add(1);
        match self.focus.overlay_depth {
            1 => OverlayTransition::DetachAll,
            depth => OverlayTransition::Nested(depth),
        }
    }

    pub fn exit_overlay(&mut self) -> OverlayTransition {
        match self.focus.overlay_depth {
            0 => OverlayTransition::Unchanged,
            1 => {
                self.focus.overlay_depth = 0;
                OverlayTransition::ReattachAll
            }
            depth => {
                self.focus.overlay_depth = depth - 1;
                OverlayTransition::Nested(depth - 1)
            }
        }
    }
}
