use trio_common::{PaneSide, ProviderId};

/// Per-pane bookkeeping. `Left` is always open.
#[derive(Debug, Clone, PartialEq)]
pub struct Pane {
    pub side: PaneSide,
    pub is_open: bool,
    pub active_provider: Option<ProviderId>,
    pub last_known_url: Option<String>,
    pub last_known_title: Option<String>,
}

impl Pane {
    pub fn new(side: PaneSide) -> Self {
        Self {
            side,
            is_open: side == PaneSide::Left,
            active_provider: None,
            last_known_url: None,
            last_known_title: None,
        }
    }

    /// Drop everything cached about the pane's content.
    pub(crate) fn clear(&mut self) {
        self.active_provider = None;
        self.last_known_url = None;
        self.last_known_title = None;
    }
}
