use trio_common::{PaneSide, ProviderId};

/// Transitions accepted by [`PaneStateMachine::execute`](crate::PaneStateMachine::execute).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaneCommand {
    Open(PaneSide, ProviderId),
    Close(PaneSide),
    CloseAll,
    Activate(PaneSide),
    EnterOverlay,
    ExitOverlay,
    ToggleTabLock(PaneSide),
}
