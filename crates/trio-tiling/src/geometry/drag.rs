//! Divider drag: pointer position to new split ratios.

use super::calculation::sanitize_split;
use super::types::{
    DividerKind, GeometryEngine, SplitRatios, WindowMetrics, MAX_SPLIT_RATIO, MIN_SPLIT_RATIO,
};

impl GeometryEngine {
    /// Ratios after dragging `kind` to `pointer_x`. Unchanged when the
    /// window has no room to move the divider.
    pub fn drag(
        &self,
        kind: DividerKind,
        metrics: &WindowMetrics,
        ratios: &SplitRatios,
        pointer_x: f64,
    ) -> SplitRatios {
        match kind {
            DividerKind::Split => self.drag_split(metrics, ratios, pointer_x),
            DividerKind::Left => self.drag_left(metrics, ratios, pointer_x),
            DividerKind::Right => self.drag_right(metrics, ratios, pointer_x),
        }
    }

    /// Two-pane drag. The ratio stays inside `[0.2, 0.8]` and, where the
    /// window allows it, keeps both panes at the minimum width.
    pub fn drag_split(&self, metrics: &WindowMetrics, ratios: &SplitRatios, pointer_x: f64) -> SplitRatios {
        let available = metrics.available();
        if available <= 0.0 || !pointer_x.is_finite() {
            return *ratios;
        }

        let ratio = (pointer_x - metrics.sidebar_width) / available;
        let (lo, hi) = match self.two_pane_split_bounds(available) {
            Some((lo_px, hi_px)) => (
                (lo_px / available).max(MIN_SPLIT_RATIO),
                (hi_px / available).min(MAX_SPLIT_RATIO),
            ),
            None => (MIN_SPLIT_RATIO, MAX_SPLIT_RATIO),
        };
        let split_ratio = if lo <= hi {
            ratio.clamp(lo, hi)
        } else {
            sanitize_split(ratio)
        };

        SplitRatios {
            split_ratio,
            ..*ratios
        }
    }

    /// Three-pane drag of the left divider. The middle pane keeps its pixel
    /// width; `r1` and `r2` are re-derived from the resulting widths.
    pub fn drag_left(&self, metrics: &WindowMetrics, ratios: &SplitRatios, pointer_x: f64) -> SplitRatios {
        let (widths, degenerate) = self.three_pane_widths(metrics, ratios);
        if degenerate || !pointer_x.is_finite() {
            return *ratios;
        }
        let free = self.three_pane_free(metrics);
        let [_, mid_w, _] = widths;
        let min = self.min_pane_width;

        let max_left = (free - mid_w - min).max(min);
        let left_w = (pointer_x - metrics.sidebar_width - self.gutter / 2.0).clamp(min, max_left);

        SplitRatios {
            r1: left_w / free,
            r2: mid_w / free,
            ..*ratios
        }
    }

    /// Three-pane drag of the right divider. The left pane keeps its pixel
    /// width; only the middle pane grows or shrinks.
    pub fn drag_right(&self, metrics: &WindowMetrics, ratios: &SplitRatios, pointer_x: f64) -> SplitRatios {
        let (widths, degenerate) = self.three_pane_widths(metrics, ratios);
        if degenerate || !pointer_x.is_finite() {
            return *ratios;
        }
        let free = self.three_pane_free(metrics);
        let [left_w, _, _] = widths;
        let min = self.min_pane_width;
        let g = self.gutter;

        let max_mid = (free - left_w - min).max(min);
        let mid_w = (pointer_x - metrics.sidebar_width - left_w - g - g / 2.0).clamp(min, max_mid);

        SplitRatios {
            r1: left_w / free,
            r2: mid_w / free,
            ..*ratios
        }
    }
}
