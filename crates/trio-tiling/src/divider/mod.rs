mod session;
mod sidebar;

pub use session::{DividerController, DragSession};
pub use sidebar::{SidebarDebounce, SIDEBAR_MIN_DELTA_PX, SIDEBAR_MIN_INTERVAL};
