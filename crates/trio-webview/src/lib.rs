//! Content surfaces for the three panes.
//!
//! - [`SurfaceHost`]: the capability the coordinator drives
//! - [`ViewCache`]: one persistent surface per (provider, pane), re-attached
//!   instead of reloaded on every switch
//! - [`AuthGate`]: async predicate consulted before attaching gated providers
//! - [`WryHost`]: child `wry` webviews toggled visible inside the main window

pub mod cache;
pub mod events;
pub mod gate;
pub mod host;
pub mod noop;
pub mod wry_host;

pub use cache::{Activation, ViewCache};
pub use events::{PageLoadState, SurfaceEvent};
pub use gate::{AllowAll, AuthGate, AuthVerdict, SwitchGenerations, SwitchTicket};
pub use host::{SurfaceHandle, SurfaceHost};
pub use noop::{HostCall, NoopHost};
pub use wry_host::WryHost;
