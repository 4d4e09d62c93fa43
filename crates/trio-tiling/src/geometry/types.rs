//! Geometry engine types.

use serde::{Deserialize, Serialize};
pub use trio_common::AddressBounds;
use trio_common::{PaneSide, Rect};

/// Two-pane ratio bounds.
pub const MIN_SPLIT_RATIO: f64 = 0.2;
pub const MAX_SPLIT_RATIO: f64 = 0.8;

/// Pixel constants for laying out panes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryEngine {
    pub min_pane_width: f64,
    /// Width of the draggable gutter between adjacent panes.
    pub gutter: f64,
    /// Horizontal inset of each pane's address bar.
    pub address_inset: f64,
}

impl Default for GeometryEngine {
    fn default() -> Self {
        Self {
            min_pane_width: 200.0,
            gutter: 24.0,
            address_inset: 8.0,
        }
    }
}

/// Window dimensions the layout is computed against, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowMetrics {
    pub width: f64,
    pub height: f64,
    pub sidebar_width: f64,
    /// Space above the surfaces reserved for the address row.
    pub top_offset: f64,
}

impl WindowMetrics {
    /// Width to the right of the sidebar.
    pub fn available(&self) -> f64 {
        self.width - self.sidebar_width
    }

    fn content_height(&self) -> f64 {
        (self.height - self.top_offset).max(0.0)
    }

    pub(super) fn column(&self, x: f64, width: f64) -> Rect {
        Rect::new(x, self.top_offset, width.max(0.0), self.content_height())
    }
}

/// Persisted split ratios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitRatios {
    /// Two-pane share of the left pane.
    pub split_ratio: f64,
    /// Three-pane share of the left pane.
    pub r1: f64,
    /// Three-pane share of the middle pane.
    pub r2: f64,
}

impl Default for SplitRatios {
    fn default() -> Self {
        Self::equal()
    }
}

impl SplitRatios {
    pub fn equal() -> Self {
        Self {
            split_ratio: 0.5,
            r1: 1.0 / 3.0,
            r2: 1.0 / 3.0,
        }
    }
}

/// Which secondary panes are open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OpenPanes {
    pub right: bool,
    pub third: bool,
}

impl OpenPanes {
    pub fn count(&self) -> usize {
        1 + self.right as usize + self.third as usize
    }

    /// The secondary pane shown in a two-pane layout.
    pub fn secondary(&self) -> Option<PaneSide> {
        match (self.right, self.third) {
            (true, _) => Some(PaneSide::Right),
            (false, true) => Some(PaneSide::Third),
            (false, false) => None,
        }
    }
}

/// Identifies a draggable divider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DividerKind {
    /// The only divider of a two-pane layout.
    Split,
    /// Three-pane divider between left and middle.
    Left,
    /// Three-pane divider between middle and right.
    Right,
}

/// A vertical divider line centered in a gutter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Divider {
    pub kind: DividerKind,
    pub center_x: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Divider {
    /// Half-width of the grab zone on each side of the center.
    pub const HIT_HALF_WIDTH: f64 = 6.0;

    pub fn hit_test(&self, x: f64, y: f64) -> bool {
        (x - self.center_x).abs() <= Self::HIT_HALF_WIDTH && y >= self.top && y <= self.bottom
    }
}

/// Result of a layout pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaneLayout {
    pub panes: Vec<(PaneSide, Rect)>,
    pub dividers: Vec<Divider>,
    pub address_bars: Vec<(PaneSide, AddressBounds)>,
    /// The window could not honor the minimum pane width.
    pub degenerate: bool,
}

impl PaneLayout {
    pub fn rect(&self, side: PaneSide) -> Option<Rect> {
        self.panes.iter().find(|(s, _)| *s == side).map(|(_, r)| *r)
    }

    pub fn address_bar(&self, side: PaneSide) -> Option<AddressBounds> {
        self.address_bars
            .iter()
            .find(|(s, _)| *s == side)
            .map(|(_, b)| *b)
    }

    pub fn divider(&self, kind: DividerKind) -> Option<&Divider> {
        self.dividers.iter().find(|d| d.kind == kind)
    }

    /// Divider under the pointer, if any.
    pub fn divider_at(&self, x: f64, y: f64) -> Option<DividerKind> {
        self.dividers
            .iter()
            .find(|d| d.hit_test(x, y))
            .map(|d| d.kind)
    }
}
