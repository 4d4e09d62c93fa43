//! Polling of surface events, authorization verdicts and UI events.

use std::time::{Duration, Instant};

use tokio::sync::broadcast::error::TryRecvError;
use winit::event_loop::ActiveEventLoop;

use trio_common::UiEvent;

use super::core::TrioApp;

/// How often channels are drained while the window is idle.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

impl TrioApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.spawn_auth_checks();
            self.poll_auth();
            self.poll_surface_events();
            self.poll_ui_events();
        }

        event_loop.set_control_flow(winit::event_loop::ControlFlow::WaitUntil(
            Instant::now() + POLL_INTERVAL,
        ));
    }

    /// Feed page-load and title callbacks back into the coordinator.
    fn poll_surface_events(&mut self) {
        let Some(coordinator) = self.coordinator.as_mut() else {
            return;
        };
        for event in coordinator.host().drain_events() {
            coordinator.on_surface_event(event);
        }
    }

    fn poll_ui_events(&mut self) {
        let Some(rx) = self.ui_events.as_mut() else {
            return;
        };

        let mut title_dirty = false;
        loop {
            match rx.try_recv() {
                Ok(event) => {
                    title_dirty |= affects_title(&event);
                    log_ui_event(&event);
                }
                Err(TryRecvError::Lagged(n)) => {
                    tracing::warn!("UI event receiver lagged, {n} events dropped");
                    title_dirty = true;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }

        if title_dirty {
            self.update_window_title();
        }
    }
}

fn affects_title(event: &UiEvent) -> bool {
    matches!(
        event,
        UiEvent::ActiveSideChanged(_)
            | UiEvent::ProviderHighlightChanged { .. }
            | UiEvent::OverlayChanged { .. }
            | UiEvent::TabLockChanged(_)
            | UiEvent::PaneNotice { .. }
            | UiEvent::NoticeCleared(_)
    )
}

fn log_ui_event(event: &UiEvent) {
    match event {
        UiEvent::PaneNotice { pane, notice } => {
            tracing::warn!(side = %pane, "{}", notice.message());
        }
        UiEvent::PaneGeometryChanged(rects) => {
            for pane in rects {
                tracing::trace!(
                    side = %pane.side,
                    width = pane.rect.width,
                    address_x = pane.address.x,
                    address_width = pane.address.width,
                    "Pane geometry changed"
                );
            }
        }
        other => tracing::debug!(event = ?other, "UI event"),
    }
}
