use serde::{Deserialize, Serialize};

mod action_enum;

pub use action_enum::*;

/// Direction for provider cycling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CycleDirection {
    Forward,
    Backward,
}

impl CycleDirection {
    /// Signed step applied to the current provider index.
    pub fn step(&self) -> isize {
        match self {
            CycleDirection::Forward => 1,
            CycleDirection::Backward => -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaneSide;

    #[test]
    fn action_serde_roundtrip() {
        let actions = vec![
            Action::Cycle(CycleDirection::Backward),
            Action::FocusPane(PaneSide::Third),
            Action::RetryActivePane,
            Action::ToggleSidebarLock,
            Action::SelectProvider {
                pane: PaneSide::Left,
                provider: "claude".into(),
            },
        ];

        for action in &actions {
            let json = serde_json::to_string(action).unwrap();
            let deserialized: Action = serde_json::from_str(&json).unwrap();
            assert_eq!(*action, deserialized);
        }
    }

    #[test]
    fn cycle_direction_steps() {
        assert_eq!(CycleDirection::Forward.step(), 1);
        assert_eq!(CycleDirection::Backward.step(), -1);
    }
}
