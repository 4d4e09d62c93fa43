//! Layout calculation: window metrics and ratios to pane rects.

use trio_common::{PaneSide, Rect};

use super::types::{
    AddressBounds, Divider, DividerKind, GeometryEngine, OpenPanes, PaneLayout, SplitRatios,
    WindowMetrics, MAX_SPLIT_RATIO, MIN_SPLIT_RATIO,
};

/// Upper bound on rebalance passes. Each pass either settles one deficit or
/// exhausts one donor, so three panes never need more than a handful.
const MAX_REBALANCE_PASSES: usize = 8;

impl GeometryEngine {
    pub fn compute(&self, metrics: &WindowMetrics, open: OpenPanes, ratios: &SplitRatios) -> PaneLayout {
        if metrics.available() <= 0.0 {
            return self.minimum_safe(metrics);
        }

        let mut layout = match open {
            OpenPanes {
                right: true,
                third: true,
            } => self.three_pane(metrics, ratios),
            _ => match open.secondary() {
                Some(secondary) => self.two_pane(metrics, secondary, ratios.split_ratio),
                None => self.single(metrics),
            },
        };

        layout.address_bars = layout
            .panes
            .iter()
            .map(|(side, rect)| (*side, self.address_bounds(rect)))
            .collect();
        layout
    }

    /// Address bar extent inside `rect`.
    pub fn address_bounds(&self, rect: &Rect) -> AddressBounds {
        AddressBounds {
            x: rect.x + self.address_inset,
            width: (rect.width - 2.0 * self.address_inset).max(0.0),
        }
    }

    fn minimum_safe(&self, metrics: &WindowMetrics) -> PaneLayout {
        let rect = Rect::new(0.0, 0.0, self.min_pane_width, metrics.height.max(0.0));
        PaneLayout {
            panes: vec![(PaneSide::Left, rect)],
            dividers: Vec::new(),
            address_bars: vec![(PaneSide::Left, self.address_bounds(&rect))],
            degenerate: true,
        }
    }

    fn single(&self, metrics: &WindowMetrics) -> PaneLayout {
        PaneLayout {
            panes: vec![(
                PaneSide::Left,
                metrics.column(metrics.sidebar_width, metrics.available()),
            )],
            ..Default::default()
        }
    }

    fn two_pane(&self, metrics: &WindowMetrics, secondary: PaneSide, ratio: f64) -> PaneLayout {
        let available = metrics.available();
        let half_gutter = self.gutter / 2.0;
        let (split, degenerate) = match self.two_pane_split_bounds(available) {
            Some((lo, hi)) => ((available * sanitize_split(ratio)).clamp(lo, hi), false),
            None => (available / 2.0, true),
        };

        let center = metrics.sidebar_width + split;
        PaneLayout {
            panes: vec![
                (
                    PaneSide::Left,
                    metrics.column(metrics.sidebar_width, split - half_gutter),
                ),
                (
                    secondary,
                    metrics.column(center + half_gutter, available - split - half_gutter),
                ),
            ],
            dividers: vec![self.divider(DividerKind::Split, center, metrics)],
            address_bars: Vec::new(),
            degenerate,
        }
    }

    /// Pixel range of the two-pane split point that keeps both panes at the
    /// minimum width. `None` when the window is too narrow for that.
    pub(super) fn two_pane_split_bounds(&self, available: f64) -> Option<(f64, f64)> {
        let lo = self.min_pane_width + self.gutter / 2.0;
        let hi = available - self.min_pane_width - self.gutter / 2.0;
        (lo <= hi).then_some((lo, hi))
    }

    fn three_pane(&self, metrics: &WindowMetrics, ratios: &SplitRatios) -> PaneLayout {
        let (widths, degenerate) = self.three_pane_widths(metrics, ratios);
        let [left_w, mid_w, right_w] = widths;
        let g = self.gutter;
        let sidebar = metrics.sidebar_width;

        let mid_x = sidebar + left_w + g;
        let right_x = mid_x + mid_w + g;

        PaneLayout {
            panes: vec![
                (PaneSide::Left, metrics.column(sidebar, left_w)),
                (PaneSide::Right, metrics.column(mid_x, mid_w)),
                (PaneSide::Third, metrics.column(right_x, right_w)),
            ],
            dividers: vec![
                self.divider(DividerKind::Left, sidebar + left_w + g / 2.0, metrics),
                self.divider(DividerKind::Right, mid_x + mid_w + g / 2.0, metrics),
            ],
            address_bars: Vec::new(),
            degenerate,
        }
    }

    /// Width available to the three panes once both gutters are removed.
    pub(super) fn three_pane_free(&self, metrics: &WindowMetrics) -> f64 {
        metrics.available() - 2.0 * self.gutter
    }

    /// Pixel widths of (left, middle, right) after the minimum-width
    /// rebalance, plus whether the window forced equal shares.
    pub(super) fn three_pane_widths(
        &self,
        metrics: &WindowMetrics,
        ratios: &SplitRatios,
    ) -> ([f64; 3], bool) {
        let free = self.three_pane_free(metrics);
        if free < 3.0 * self.min_pane_width {
            let share = (free / 3.0).max(0.0);
            return ([share; 3], true);
        }

        let r1 = sanitize_share(ratios.r1);
        let r2 = sanitize_share(ratios.r2);
        let left = free * r1;
        let mid = free * r2;
        let mut widths = [left, mid, free - left - mid];
        rebalance(&mut widths, self.min_pane_width);
        (widths, false)
    }

    fn divider(&self, kind: DividerKind, center_x: f64, metrics: &WindowMetrics) -> Divider {
        Divider {
            kind,
            center_x,
            top: 0.0,
            bottom: metrics.height.max(0.0),
        }
    }
}

/// Lift every width below `min` by taking from the pane with the most slack.
///
/// Callers guarantee `sum(widths) >= min * widths.len()`, so the donors
/// always cover the deficits and no donor is pushed below `min`.
pub(super) fn rebalance(widths: &mut [f64; 3], min: f64) {
    for _ in 0..MAX_REBALANCE_PASSES {
        let Some(needy) = (0..3).find(|&i| widths[i] < min) else {
            return;
        };
        let Some(donor) = (0..3)
            .filter(|&i| widths[i] > min)
            .max_by(|&a, &b| widths[a].total_cmp(&widths[b]))
        else {
            return;
        };
        let take = (min - widths[needy]).min(widths[donor] - min);
        widths[needy] += take;
        widths[donor] -= take;
    }
}

pub(super) fn sanitize_split(ratio: f64) -> f64 {
    if ratio.is_finite() {
        ratio.clamp(MIN_SPLIT_RATIO, MAX_SPLIT_RATIO)
    } else {
        0.5
    }
}

fn sanitize_share(share: f64) -> f64 {
    if share.is_finite() {
        share.clamp(0.0, 1.0)
    } else {
        1.0 / 3.0
    }
}
