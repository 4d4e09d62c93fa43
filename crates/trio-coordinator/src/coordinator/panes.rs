//! Provider switching, pane open / close and focus.

use tracing::{debug, info, warn};
use trio_common::{CycleDirection, PaneNotice, PaneSide, ProviderId, TrioError, UiEvent};
use trio_tiling::PaneCommand;
use trio_webview::{AuthVerdict, SurfaceHost, SwitchTicket};

use super::core::Coordinator;
use crate::cycler;
use crate::providers::Provider;

impl<H: SurfaceHost> Coordinator<H> {
    /// Show `provider` in `side`.
    ///
    /// Ungated providers attach immediately. Gated providers queue an auth
    /// check (see [`take_auth_requests`](Self::take_auth_requests)) and
    /// attach in [`complete_auth`](Self::complete_auth). Returns `false` for
    /// a closed pane or an unknown provider.
    pub fn select_provider(&mut self, side: PaneSide, provider: ProviderId) -> bool {
        if !self.panes.is_open(side) {
            debug!(pane = %side, provider = %provider, "select on closed pane ignored");
            return false;
        }
        let Some(entry) = self.registry.resolve(&provider) else {
            warn!(pane = %side, provider = %provider, "unknown provider");
            return false;
        };

        let ticket = self.generations.issue(side, provider.clone());
        let last_url = self.cache.last_url(side, &provider).map(str::to_string);
        let pane = self.panes.pane_mut(side);
        if pane.active_provider.as_ref() != Some(&provider) {
            pane.last_known_title = None;
        }
        pane.active_provider = Some(provider.clone());
        pane.last_known_url = last_url;

        self.publish(UiEvent::ProviderHighlightChanged {
            pane: side,
            provider: provider.clone(),
            full_rerender: !side.is_secondary(),
        });

        if entry.is_gated() {
            debug!(pane = %side, provider = %provider, generation = ticket.generation, "auth check queued");
            self.pending_auth.retain(|t| t.side != side);
            self.pending_auth.push(ticket);
        } else {
            self.activate(side, &entry);
        }
        true
    }

    /// Apply an auth verdict. Verdicts for a superseded switch are dropped.
    /// Returns `true` if the verdict was applied.
    pub fn complete_auth(&mut self, ticket: SwitchTicket, verdict: AuthVerdict) -> bool {
        if !self.generations.is_current(&ticket) {
            debug!(pane = %ticket.side, provider = %ticket.provider, "stale auth verdict dropped");
            return false;
        }
        let Some(entry) = self.registry.resolve(&ticket.provider) else {
            return false;
        };

        if verdict.is_authorized() {
            self.activate(ticket.side, &entry);
        } else {
            let err = TrioError::AuthRequired(ticket.provider.to_string());
            info!(pane = %ticket.side, ?verdict, "{err}");
            self.cache.release_pane(&mut self.host, ticket.side);
            self.show_notice(
                ticket.side,
                PaneNotice::AuthRequired {
                    provider: ticket.provider,
                },
            );
        }
        true
    }

    /// Attach `provider`'s surface in `side`, creating it on first use.
    pub(super) fn activate(&mut self, side: PaneSide, provider: &Provider) {
        let url = self
            .cache
            .last_url(side, &provider.id)
            .unwrap_or(&provider.home_url)
            .to_string();

        match self.cache.ensure_active(&mut self.host, side, &provider.id, &url) {
            Ok(activation) => {
                debug!(pane = %side, provider = %provider.id, ?activation, "provider active");
                self.clear_notice(side);
                if side == self.panes.active_side() && !self.panes.in_overlay() {
                    self.focus_host(side);
                }
            }
            Err(e) => {
                warn!(pane = %side, provider = %provider.id, error = %e, "surface creation failed");
                self.show_notice(
                    side,
                    PaneNotice::SurfaceCreationFailed {
                        provider: provider.id.clone(),
                        reason: e.to_string(),
                    },
                );
            }
        }
    }

    /// Open a secondary pane showing `provider`, or its configured default.
    /// The pane is not activated. Returns `true` if the pane was closed.
    pub fn open_pane(&mut self, side: PaneSide, provider: Option<ProviderId>) -> bool {
        if !side.is_secondary() {
            return false;
        }
        let provider = match provider {
            Some(p) => Some(p),
            None => self
                .panes
                .pane(side)
                .active_provider
                .clone()
                .or_else(|| self.registry.resolve_or_first(self.default_for(side))),
        };
        let Some(provider) = provider else {
            warn!(pane = %side, "no provider to open");
            return false;
        };

        let newly_opened = self.panes.open(side, provider.clone());
        if newly_opened {
            info!(pane = %side, provider = %provider, "pane opened");
            self.divider.cancel();
            self.relayout();
        }
        self.select_provider(side, provider);
        newly_opened
    }

    /// Close a secondary pane. Its surfaces stay cached. Closing `Left`
    /// resets it to the default provider instead.
    pub fn close_pane(&mut self, side: PaneSide) -> bool {
        if !side.is_secondary() {
            return self.reset_left();
        }
        if !self.panes.is_open(side) {
            return false;
        }

        let was_active = self.panes.active_side();
        self.generations.invalidate(side);
        self.pending_auth.retain(|t| t.side != side);
        self.cache.release_pane(&mut self.host, side);
        self.clear_notice(side);
        self.panes.execute(PaneCommand::Close(side));
        info!(pane = %side, "pane closed");

        self.divider.cancel();
        self.relayout();

        let active = self.panes.active_side();
        if active != was_active {
            self.publish(UiEvent::ActiveSideChanged(active));
            if !self.panes.in_overlay() {
                self.focus_host(active);
            }
        }
        true
    }

    /// Close both secondary panes. Returns the sides that were open.
    pub fn close_all(&mut self) -> Vec<PaneSide> {
        [PaneSide::Right, PaneSide::Third]
            .into_iter()
            .filter(|side| self.close_pane(*side))
            .collect()
    }

    fn reset_left(&mut self) -> bool {
        match self.registry.resolve_or_first(&self.defaults.default_left) {
            Some(provider) => self.select_provider(PaneSide::Left, provider),
            None => false,
        }
    }

    /// Make `side` the active pane. Returns `true` if focus moved.
    pub fn set_active_side(&mut self, side: PaneSide) -> bool {
        if !self.panes.execute(PaneCommand::Activate(side)) {
            return false;
        }
        self.publish(UiEvent::ActiveSideChanged(side));
        if !self.panes.in_overlay() {
            self.focus_host(side);
        }
        true
    }

    /// Step the cycled pane's provider. The cycled pane is the tab-lock
    /// target when it is open, else the active pane.
    pub fn cycle(&mut self, direction: CycleDirection) -> Option<ProviderId> {
        let side = self.panes.cycle_target();
        let pane = self.panes.pane(side);
        let next = cycler::next(
            &self.registry,
            side,
            pane.active_provider.as_ref(),
            pane.last_known_url.as_deref(),
            direction,
        )?;
        self.select_provider(side, next.clone());
        Some(next)
    }

    /// Retry the provider named by `side`'s notice.
    pub fn retry(&mut self, side: PaneSide) -> bool {
        let Some(notice) = self.notices.get(&side) else {
            return false;
        };
        let provider = notice.provider().clone();
        self.clear_notice(side);
        self.select_provider(side, provider)
    }

    fn default_for(&self, side: PaneSide) -> &str {
        match side {
            PaneSide::Left => &self.defaults.default_left,
            PaneSide::Right => &self.defaults.default_right,
            PaneSide::Third => &self.defaults.default_third,
        }
    }

    pub(super) fn focus_host(&mut self, side: PaneSide) {
        if let Err(e) = self.host.set_focus(side) {
            debug!(pane = %side, error = %e, "focus not applied");
        }
    }

    fn show_notice(&mut self, side: PaneSide, notice: PaneNotice) {
        self.notices.insert(side, notice.clone());
        self.publish(UiEvent::PaneNotice { pane: side, notice });
    }

    fn clear_notice(&mut self, side: PaneSide) {
        if self.notices.remove(&side).is_some() {
            self.publish(UiEvent::NoticeCleared(side));
        }
    }
}
