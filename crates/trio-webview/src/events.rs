//! Events emitted by hosted surfaces.

use serde::{Deserialize, Serialize};
use trio_common::{PaneSide, ProviderId};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    Started,
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Pushed by surface callbacks, drained by the event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    PageLoad {
        side: PaneSide,
        provider: ProviderId,
        state: PageLoadState,
        url: String,
    },
    TitleChanged {
        side: PaneSide,
        provider: ProviderId,
        title: String,
    },
    /// A navigation passed the scheme filter.
    NavigationRequested {
        side: PaneSide,
        provider: ProviderId,
        url: String,
    },
}

impl SurfaceEvent {
    pub fn side(&self) -> PaneSide {
        match self {
            SurfaceEvent::PageLoad { side, .. }
            | SurfaceEvent::TitleChanged { side, .. }
            | SurfaceEvent::NavigationRequested { side, .. } => *side,
        }
    }

    pub fn provider(&self) -> &ProviderId {
        match self {
            SurfaceEvent::PageLoad { provider, .. }
            | SurfaceEvent::TitleChanged { provider, .. }
            | SurfaceEvent::NavigationRequested { provider, .. } => provider,
        }
    }
}
