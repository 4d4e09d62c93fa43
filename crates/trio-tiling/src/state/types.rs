//! Pane state machine types.

use serde::{Deserialize, Serialize};
use trio_common::PaneSide;

use crate::geometry::OpenPanes;
use crate::pane::Pane;

/// Keyboard focus, tab lock and overlay nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusState {
    pub active_side: PaneSide,
    /// Pane that provider cycling targets regardless of focus.
    pub tab_lock: Option<PaneSide>,
    /// Number of nested overlays. Surfaces are hidden while non-zero.
    pub overlay_depth: u32,
}

impl Default for FocusState {
    fn default() -> Self {
        Self {
            active_side: PaneSide::Left,
            tab_lock: None,
            overlay_depth: 0,
        }
    }
}

/// What the host must do after an overlay transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTransition {
    /// Depth went 0 -> 1: hide every surface.
    DetachAll,
    /// Depth went 1 -> 0: show the surfaces again.
    ReattachAll,
    /// Depth changed without crossing zero.
    Nested(u32),
    /// Exit requested at depth 0.
    Unchanged,
}

/// Open flags, per-pane content and [`FocusState`] for the three panes.
#[derive(Debug, Clone)]
pub struct PaneStateMachine {
    pub(super) focus: FocusState,
    pub(super) panes: [Pane; 3],
}

impl PaneStateMachine {
    /// Left active, nothing else open, no lock, depth 0.
    pub fn new() -> Self {
        Self {
            focus: FocusState::default(),
            panes: [
                Pane::new(PaneSide::Left),
                Pane::new(PaneSide::Right),
                Pane::new(PaneSide::Third),
            ],
        }
    }

    pub fn focus(&self) -> &FocusState {
        &self.focus
    }

    pub fn active_side(&self) -> PaneSide {
        self.focus.active_side
    }

    pub fn tab_lock(&self) -> Option<PaneSide> {
        self.focus.tab_lock
    }

    pub fn overlay_depth(&self) -> u32 {
        self.focus.overlay_depth
    }

    pub fn in_overlay(&self) -> bool {
        self.focus.overlay_depth > 0
    }

    pub fn pane(&self, side: PaneSide) -> &Pane {
        &self.panes[index(side)]
    }

    pub fn pane_mut(&mut self, side: PaneSide) -> &mut Pane {
        &mut self.panes[index(side)]
    }

    pub fn is_open(&self, side: PaneSide) -> bool {
        self.pane(side).is_open
    }

    /// Sides currently open, in `Left, Right, Third` order.
    pub fn open_sides(&self) -> Vec<PaneSide> {
        self.panes
            .iter()
            .filter(|p| p.is_open)
            .map(|p| p.side)
            .collect()
    }

    /// Open flags in the form the geometry engine takes.
    pub fn open_panes(&self) -> OpenPanes {
        OpenPanes {
            right: self.is_open(PaneSide::Right),
            third: self.is_open(PaneSide::Third),
        }
    }
}

impl Default for PaneStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

pub(super) fn index(side: PaneSide) -> usize {
    match side {
        PaneSide::Left => 0,
        PaneSide::Right => 1,
        PaneSide::Third => 2,
    }
}
