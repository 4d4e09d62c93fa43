//! The pane state machine: which panes are open, which is active, the
//! tab lock and the overlay depth.

mod dispatch;
mod focus;
mod operations;
mod types;

pub use types::*;
