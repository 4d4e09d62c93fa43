//! Geometry engine: pure pane layout from window metrics and split ratios.

mod calculation;
mod drag;
mod types;

pub use types::*;
