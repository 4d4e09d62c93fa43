use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use trio_common::{PaneSide, ProviderId};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, SurfaceEvent};

pub(super) type EventSink = Arc<Mutex<Vec<SurfaceEvent>>>;

/// URL prefixes a hosted surface may navigate to. Provider apps move
/// freely across their own and their identity providers' https origins;
/// everything else (file:, custom schemes) is blocked.
pub const ALLOWED_NAV_PREFIXES: &[&str] = &[
    "https://",
    "http://localhost",
    "http://127.0.0.1",
    "about:blank",
];

pub fn is_navigation_allowed(url: &str) -> bool {
    ALLOWED_NAV_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
}

fn push(events: &EventSink, event: SurfaceEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}

pub(super) fn attach_page_load_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: EventSink,
    side: PaneSide,
    provider: ProviderId,
) -> WebViewBuilder<'a> {
    builder.with_on_page_load_handler(move |event, url| {
        let state = PageLoadState::from(event);
        debug!(pane = %side, provider = %provider, ?state, url = %url, "page load");
        push(
            &events,
            SurfaceEvent::PageLoad {
                side,
                provider: provider.clone(),
                state,
                url,
            },
        );
    })
}

pub(super) fn attach_title_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: EventSink,
    side: PaneSide,
    provider: ProviderId,
) -> WebViewBuilder<'a> {
    builder.with_document_title_changed_handler(move |title| {
        debug!(pane = %side, provider = %provider, title = %title, "title changed");
        push(
            &events,
            SurfaceEvent::TitleChanged {
                side,
                provider: provider.clone(),
                title,
            },
        );
    })
}

pub(super) fn attach_navigation_handler<'a>(
    builder: WebViewBuilder<'a>,
    events: EventSink,
    side: PaneSide,
    provider: ProviderId,
) -> WebViewBuilder<'a> {
    builder.with_navigation_handler(move |url| {
        if !is_navigation_allowed(&url) {
            warn!(pane = %side, provider = %provider, url = %url, "navigation blocked");
            return false;
        }
        push(
            &events,
            SurfaceEvent::NavigationRequested {
                side,
                provider: provider.clone(),
                url,
            },
        );
        true
    })
}
