//! Window title management: reflects the focused pane.

use trio_common::{Action, PaneNotice, PaneSide, ProviderId};

use super::core::TrioApp;

/// Format: "Trio - {provider} ({side})", with the tab lock and overlay
/// state appended when set. A pending notice on the focused pane goes last,
/// followed by the retry keybind when one is bound.
pub(super) fn title_text(
    provider: Option<&ProviderId>,
    side: PaneSide,
    tab_lock: Option<PaneSide>,
    overlay_depth: u32,
    notice: Option<(&PaneNotice, Option<&str>)>,
) -> String {
    let mut title = match provider {
        Some(provider) => format!("Trio - {provider} ({side})"),
        None => "Trio".to_string(),
    };
    if let Some(lock) = tab_lock {
        title.push_str(&format!(" [tab: {lock}]"));
    }
    if overlay_depth > 0 {
        title.push_str(" [overlay]");
    }
    if let Some((notice, retry)) = notice {
        title.push_str(&format!(" - {}", notice.message()));
        if let Some(keys) = retry {
            title.push_str(&format!(" ({keys} to retry)"));
        }
    }
    title
}

impl TrioApp {
    pub(super) fn update_window_title(&self) {
        let (Some(window), Some(coordinator)) = (&self.window, &self.coordinator) else {
            return;
        };
        let panes = coordinator.panes();
        let side = panes.active_side();
        let retry = self.registry.keybind_for_action(&Action::RetryActivePane);
        let notice = coordinator
            .notice(side)
            .map(|notice| (notice, retry.as_deref()));
        window.set_title(&title_text(
            coordinator.provider(side),
            side,
            panes.tab_lock(),
            panes.overlay_depth(),
            notice,
        ));
    }
}
