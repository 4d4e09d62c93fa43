pub mod commands;
pub mod divider;
pub mod geometry;
pub mod pane;
pub mod state;

pub use commands::PaneCommand;
pub use divider::{DividerController, SidebarDebounce};
pub use geometry::{DividerKind, GeometryEngine, OpenPanes, PaneLayout, SplitRatios, WindowMetrics};
pub use pane::Pane;
pub use state::{FocusState, OverlayTransition, PaneStateMachine};
