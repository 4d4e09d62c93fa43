//! Pointer-driven divider drag.
//!
//! Tracks the single active drag. The coordinator calls in on pointer
//! down / move / up and persists the ratios returned on release.

use crate::geometry::{DividerKind, GeometryEngine, PaneLayout, SplitRatios, WindowMetrics};

/// The drag in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub divider: DividerKind,
    /// Pointer x when the drag started.
    pub start_x: f64,
    /// Ratios as of the most recent move.
    pub ratios: SplitRatios,
}

/// Owns at most one [`DragSession`].
#[derive(Debug, Default)]
pub struct DividerController {
    session: Option<DragSession>,
}

impl DividerController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Start a drag if the pointer is on a divider. Ignored while another
    /// drag is active. Returns `true` if a drag started.
    pub fn pointer_down(&mut self, layout: &PaneLayout, x: f64, y: f64, ratios: SplitRatios) -> bool {
        if self.session.is_some() {
            return false;
        }
        match layout.divider_at(x, y) {
            Some(divider) => {
                tracing::debug!(?divider, x, "divider drag started");
                self.session = Some(DragSession {
                    divider,
                    start_x: x,
                    ratios,
                });
                true
            }
            None => false,
        }
    }

    /// New ratios for the pointer at `x`, or `None` when no drag is active.
    pub fn pointer_move(
        &mut self,
        engine: &GeometryEngine,
        metrics: &WindowMetrics,
        x: f64,
    ) -> Option<SplitRatios> {
        let session = self.session.as_mut()?;
        session.ratios = engine.drag(session.divider, metrics, &session.ratios, x);
        Some(session.ratios)
    }

    /// End the drag. Returns the ratios to persist.
    pub fn pointer_up(&mut self) -> Option<SplitRatios> {
        let session = self.session.take()?;
        tracing::debug!(divider = ?session.divider, "divider drag ended");
        Some(session.ratios)
    }

    /// Drop the drag without persisting, e.g. when the layout it was
    /// started against no longer has that divider.
    pub fn cancel(&mut self) {
        self.session = None;
    }
}
