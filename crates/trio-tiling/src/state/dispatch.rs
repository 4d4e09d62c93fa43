use crate::commands::PaneCommand;

use super::{OverlayTransition, PaneStateMachine};

impl PaneStateMachine {
    /// Apply a command. Returns `true` if the state changed.
    pub fn execute(&mut self, cmd: PaneCommand) -> bool {
        match cmd {
            PaneCommand::Open(side, provider) => {
                let before = self.pane(side).active_provider.clone();
                let newly_opened = self.open(side, provider);
                newly_opened || before != self.pane(side).active_provider
            }
            PaneCommand::Close(side) => self.close(side),
            PaneCommand::CloseAll => !self.close_all().is_empty(),
            PaneCommand::Activate(side) => {
                let before = self.active_side();
                self.set_active_side(side) && before != side
            }
            PaneCommand::EnterOverlay => {
                self.enter_overlay();
                true
            }
            PaneCommand::ExitOverlay => self.exit_overlay() != OverlayTransition::Unchanged,
            PaneCommand::ToggleTabLock(side) => {
                let before = self.tab_lock();
                self.set_tab_lock(side) != before
            }
        }
    }
}
