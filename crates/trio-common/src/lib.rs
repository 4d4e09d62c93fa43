pub mod actions;
pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use actions::{Action, CycleDirection};
pub use errors::{ConfigError, HostError, PlatformError, StorageError, TrioError};
pub use events::{EventBus, PaneNotice, PaneRect, UiEvent};
pub use id::new_id;
pub use types::{AddressBounds, PaneSide, ProviderId, Rect};

pub type Result<T> = std::result::Result<T, TrioError>;
