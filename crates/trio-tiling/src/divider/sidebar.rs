//! Debounce for host-reported sidebar widths.

use std::time::{Duration, Instant};

/// Smallest change worth a relayout.
pub const SIDEBAR_MIN_DELTA_PX: f64 = 2.0;
/// Minimum spacing between accepted reports.
pub const SIDEBAR_MIN_INTERVAL: Duration = Duration::from_millis(400);

/// Accepts a sidebar width only when it moved by at least
/// [`SIDEBAR_MIN_DELTA_PX`] and [`SIDEBAR_MIN_INTERVAL`] passed since the
/// last accepted report. A locked debounce accepts nothing.
#[derive(Debug, Clone)]
pub struct SidebarDebounce {
    width: f64,
    last_accepted: Option<Instant>,
    locked: bool,
}

impl SidebarDebounce {
    pub fn new(initial_width: f64, locked: bool) -> Self {
        Self {
            width: initial_width,
            last_accepted: None,
            locked,
        }
    }

    /// Currently accepted width.
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Feed a report. Returns the new width if it was accepted.
    pub fn report(&mut self, px: f64, now: Instant) -> Option<f64> {
        if self.locked || !px.is_finite() || px < 0.0 {
            return None;
        }
        if (px - self.width).abs() < SIDEBAR_MIN_DELTA_PX {
            return None;
        }
        if let Some(last) = self.last_accepted {
            if now.saturating_duration_since(last) < SIDEBAR_MIN_INTERVAL {
                return None;
            }
        }
        self.width = px;
        self.last_accepted = Some(now);
        Some(px)
    }
}
