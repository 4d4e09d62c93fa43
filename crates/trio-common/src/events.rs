use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::{AddressBounds, PaneSide, ProviderId, Rect};

/// A pane, its pixel rectangle inside the window and where its address
/// input sits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaneRect {
    pub side: PaneSide,
    pub rect: Rect,
    pub address: AddressBounds,
}

/// A blocking message shown in place of a pane's surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaneNotice {
    AuthRequired { provider: ProviderId },
    SurfaceCreationFailed { provider: ProviderId, reason: String },
}

impl PaneNotice {
    pub fn provider(&self) -> &ProviderId {
        match self {
            PaneNotice::AuthRequired { provider } => provider,
            PaneNotice::SurfaceCreationFailed { provider, .. } => provider,
        }
    }

    /// Text rendered by the UI layer inside the blocked pane.
    pub fn message(&self) -> String {
        match self {
            PaneNotice::AuthRequired { provider } => {
                format!("{provider} requires authorization. Sign in and retry.")
            }
            PaneNotice::SurfaceCreationFailed { provider, reason } => {
                format!("Could not open {provider}: {reason}. Retry?")
            }
        }
    }
}

/// Everything the coordinator tells the UI layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum UiEvent {
    ActiveSideChanged(PaneSide),
    PaneGeometryChanged(Vec<PaneRect>),
    ProviderHighlightChanged {
        pane: PaneSide,
        provider: ProviderId,
        /// Left re-renders its whole tab bar; secondary panes only move the highlight.
        full_rerender: bool,
    },
    PaneNotice {
        pane: PaneSide,
        notice: PaneNotice,
    },
    NoticeCleared(PaneSide),
    OverlayChanged {
        depth: u32,
    },
    TabLockChanged(Option<PaneSide>),
    AlignChanged(bool),
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<UiEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<UiEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: UiEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}
