//! Geometry recomputation, divider drags and window metrics.

use std::time::Instant;

use tracing::debug;
use trio_common::{PaneRect, TrioError, UiEvent};
use trio_webview::SurfaceHost;

use super::core::Coordinator;

impl<H: SurfaceHost> Coordinator<H> {
    /// Recompute the layout, move the surfaces and tell the UI.
    pub(super) fn relayout(&mut self) {
        self.layout = self
            .engine
            .compute(&self.metrics, self.panes.open_panes(), &self.ratios);
        if self.layout.degenerate {
            let err = TrioError::GeometryDegenerate {
                available: self.metrics.available(),
            };
            debug!(error = %err, "window below minimum layout width");
        }
        self.resize_surfaces();

        let rects = self
            .layout
            .panes
            .iter()
            .map(|&(side, rect)| PaneRect {
                side,
                rect,
                address: self
                    .layout
                    .address_bar(side)
                    .unwrap_or_else(|| self.engine.address_bounds(&rect)),
            })
            .collect();
        self.publish(UiEvent::PaneGeometryChanged(rects));
    }

    pub(super) fn resize_surfaces(&mut self) {
        for &(side, rect) in &self.layout.panes {
            if let Err(e) = self.host.resize_surface(side, rect) {
                debug!(pane = %side, error = %e, "resize not applied");
            }
        }
    }

    /// Start a divider drag if `(x, y)` is on a divider. Returns `true` if
    /// the pointer was captured.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        if self.panes.in_overlay() {
            return false;
        }
        self.divider.pointer_down(&self.layout, x, y, self.ratios)
    }

    /// Follow the pointer during a drag. Returns `true` while dragging.
    pub fn pointer_move(&mut self, x: f64) -> bool {
        match self.divider.pointer_move(&self.engine, &self.metrics, x) {
            Some(ratios) => {
                self.ratios = ratios;
                self.relayout();
                true
            }
            None => false,
        }
    }

    /// Finish a drag and persist the ratios. A drag ends align mode.
    pub fn pointer_up(&mut self) -> bool {
        let Some(ratios) = self.divider.pointer_up() else {
            return false;
        };
        self.ratios = ratios;
        if self.align_backup.take().is_some() {
            self.publish(UiEvent::AlignChanged(false));
        }

        self.pane_settings.split_ratio = ratios.split_ratio;
        self.pane_settings.three_split_r1 = ratios.r1;
        self.pane_settings.three_split_r2 = ratios.r2;
        self.persist_settings();
        self.relayout();
        true
    }

    pub fn window_resized(&mut self, width: f64, height: f64) {
        if width == self.metrics.width && height == self.metrics.height {
            return;
        }
        self.metrics.width = width;
        self.metrics.height = height;
        self.relayout();
    }

    /// Sidebar width reported by the host. Small or rapid changes are
    /// dropped. Returns `true` if the layout changed.
    pub fn report_sidebar_width(&mut self, px: f64, now: Instant) -> bool {
        match self.sidebar.report(px, now) {
            Some(width) => {
                self.metrics.sidebar_width = width;
                self.relayout();
                true
            }
            None => false,
        }
    }

    /// Whether `x` sits on the draggable sidebar edge. Always `false` while
    /// the width is locked or an overlay is up.
    pub fn sidebar_edge_at(&self, x: f64) -> bool {
        if self.sidebar.is_locked() || self.panes.in_overlay() {
            return false;
        }
        (x - self.metrics.sidebar_width).abs() <= self.engine.gutter / 2.0
    }

    pub fn is_sidebar_locked(&self) -> bool {
        self.sidebar.is_locked()
    }

    /// Freeze or release the sidebar width. Persisted.
    pub fn set_sidebar_lock(&mut self, locked: bool) {
        if self.sidebar.is_locked() == locked {
            return;
        }
        self.sidebar.set_locked(locked);
        self.pane_settings.sidebar_width_lock = locked;
        self.persist_settings();
        debug!(locked, width = self.sidebar.width(), "sidebar lock changed");
    }
}
