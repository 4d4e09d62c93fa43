//! Pane & view coordination for the trio shell.
//!
//! - [`ProviderRegistry`]: built-in providers plus the user's overlay
//! - [`cycler`]: Tab / Shift+Tab provider stepping
//! - [`HistoryBridge`]: navigation -> history forwarding
//! - [`Coordinator`]: the single owner of pane, geometry and surface state

pub mod coordinator;
pub mod cycler;
pub mod history;
pub mod providers;

pub use coordinator::Coordinator;
pub use history::HistoryBridge;
pub use providers::{Provider, ProviderRegistry};
