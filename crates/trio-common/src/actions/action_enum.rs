use serde::{Deserialize, Serialize};

use super::CycleDirection;
use crate::types::PaneSide;

/// Every user-triggerable action in the shell.
///
/// Keybinds and the UI layer both resolve to an `Action`; the coordinator
/// dispatcher matches on this enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // -- Panes --
    OpenPane(PaneSide),
    ClosePane(PaneSide),
    CloseAllPanes,
    FocusPane(PaneSide),
    ToggleTabLock(PaneSide),

    // -- Providers --
    Cycle(CycleDirection),
    SelectProvider { pane: PaneSide, provider: String },
    RetryPane(PaneSide),
    /// Retry whichever pane has focus.
    RetryActivePane,
    AddFavorite,

    // -- Overlay / layout --
    ToggleOverlay,
    ExitOverlay,
    ToggleAlign,
    ToggleSidebarLock,

    // -- App --
    Quit,

    // -- Noop --
    None,
}
