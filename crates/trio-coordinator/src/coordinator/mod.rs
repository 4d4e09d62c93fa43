//! The pane & view coordinator.
//!
//! One [`Coordinator`] owns the pane state machine, geometry, divider drag,
//! view cache and collaborators. Operations are split by concern:
//! provider switching and pane lifecycle in `panes`, overlay / tab lock /
//! align in `overlay`, geometry in `layout`, history in `navigation`.

mod core;
mod dispatch;
mod layout;
mod navigation;
mod overlay;
mod panes;

pub use self::core::Coordinator;

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::{Duration, Instant};

    use tokio::sync::broadcast::Receiver;
    use trio_common::{
        Action, ConfigError, CycleDirection, PaneNotice, PaneSide, ProviderId, StorageError,
        UiEvent,
    };
    use trio_config::schema::PaneSettings;
    use trio_config::store::{
        CustomProvider, FavoriteEntry, HistoryEntry, MemoryStore, ProviderOverride, Storage,
    };
    use trio_config::{MemorySettings, SettingsSink, TrioConfig};
    use trio_webview::{AuthVerdict, HostCall, NoopHost, SurfaceEvent, PageLoadState};

    const CLAUDE_CHAT: &str = "https://claude.ai/chat/6f1c2a9e-1234-4bcd-9ef0-aa11bb22cc33";

    #[derive(Clone)]
    struct SharedStore(Rc<RefCell<MemoryStore>>);

    impl Storage for SharedStore {
        fn ordered_provider_list(&self) -> Result<Vec<ProviderId>, StorageError> {
            self.0.borrow().ordered_provider_list()
        }
        fn overrides(&self) -> Result<Vec<ProviderOverride>, StorageError> {
            self.0.borrow().overrides()
        }
        fn custom_providers(&self) -> Result<Vec<CustomProvider>, StorageError> {
            self.0.borrow().custom_providers()
        }
        fn add_history_entry(&mut self, entry: HistoryEntry) -> Result<(), StorageError> {
            self.0.borrow_mut().add_history_entry(entry)
        }
        fn add_favorite(&mut self, entry: FavoriteEntry) -> Result<(), StorageError> {
            self.0.borrow_mut().add_favorite(entry)
        }
        fn favorites(&self) -> Result<Vec<FavoriteEntry>, StorageError> {
            self.0.borrow().favorites()
        }
        fn update_history_title(
            &mut self,
            pane: PaneSide,
            url: &str,
            title: &str,
        ) -> Result<bool, StorageError> {
            self.0.borrow_mut().update_history_title(pane, url, title)
        }
    }

    #[derive(Clone, Default)]
    struct SharedSettings(Rc<RefCell<MemorySettings>>);

    impl SettingsSink for SharedSettings {
        fn persist(&mut self, settings: &PaneSettings) -> Result<(), ConfigError> {
            self.0.borrow_mut().persist(settings)
        }
    }

    struct Harness {
        coord: Coordinator<NoopHost>,
        store: Rc<RefCell<MemoryStore>>,
        settings: Rc<RefCell<MemorySettings>>,
    }

    fn harness_with(config: TrioConfig, store: MemoryStore) -> Harness {
        let store = Rc::new(RefCell::new(store));
        let settings = SharedSettings::default();
        let mut coord = Coordinator::new(
            &config,
            NoopHost::new(),
            Box::new(SharedStore(store.clone())),
            Box::new(settings.clone()),
        );
        coord.start(1200.0, 800.0);
        Harness {
            coord,
            store,
            settings: settings.0,
        }
    }

    fn harness() -> Harness {
        harness_with(TrioConfig::default(), MemoryStore::new())
    }

    fn id(s: &str) -> ProviderId {
        ProviderId::from(s)
    }

    fn drain(rx: &mut Receiver<UiEvent>) -> Vec<UiEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    // -- Startup and switching --

    #[test]
    fn start_shows_default_left_provider() {
        let h = harness();
        assert_eq!(h.coord.provider(PaneSide::Left), Some(&id("chatgpt")));
        assert_eq!(h.coord.host().creates(), 1);
        assert_eq!(h.coord.layout().panes.len(), 1);
        assert!(h.coord.host().calls.contains(&HostCall::Create {
            side: PaneSide::Left,
            provider: id("chatgpt"),
            url: "https://chatgpt.com/".into(),
        }));
    }

    #[test]
    fn switching_back_reattaches_without_reload() {
        let mut h = harness();
        h.coord.select_provider(PaneSide::Left, id("claude"));
        h.coord.host_mut().clear_calls();
        h.coord.select_provider(PaneSide::Left, id("chatgpt"));

        assert_eq!(h.coord.host().surface_count(), 2);
        assert_eq!(h.coord.host().creates(), 0);
        assert!(h.coord.host().calls.contains(&HostCall::Attach {
            side: PaneSide::Left,
            provider: id("chatgpt"),
        }));
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let mut h = harness();
        assert!(!h.coord.select_provider(PaneSide::Left, id("nope")));
        assert_eq!(h.coord.provider(PaneSide::Left), Some(&id("chatgpt")));
    }

    #[test]
    fn select_on_closed_pane_is_ignored() {
        let mut h = harness();
        assert!(!h.coord.select_provider(PaneSide::Third, id("claude")));
        assert!(!h.coord.panes().is_open(PaneSide::Third));
    }

    // -- Pane lifecycle --

    #[test]
    fn open_right_uses_default_and_splits() {
        let mut h = harness();
        let mut rx = h.coord.events().subscribe();
        assert!(h.coord.open_pane(PaneSide::Right, None));

        assert_eq!(h.coord.provider(PaneSide::Right), Some(&id("claude")));
        assert_eq!(h.coord.active_side(), PaneSide::Left);
        let divider = &h.coord.layout().dividers[0];
        assert!((divider.center_x - 630.0).abs() < 1e-9);

        let events = drain(&mut rx);
        assert!(events
            .iter()
            .any(|e| matches!(e, UiEvent::PaneGeometryChanged(rects) if rects.len() == 2)));
    }

    #[test]
    fn third_opens_without_right() {
        let mut h = harness();
        h.coord.open_pane(PaneSide::Third, None);
        assert!(!h.coord.panes().is_open(PaneSide::Right));
        assert_eq!(h.coord.provider(PaneSide::Third), Some(&id("gemini")));
        assert!(h.coord.layout().rect(PaneSide::Third).is_some());
    }

    #[test]
    fn closing_active_right_hands_focus_to_third() {
        let mut h = harness();
        h.coord.open_pane(PaneSide::Right, None);
        h.coord.open_pane(PaneSide::Third, None);
        h.coord.set_active_side(PaneSide::Right);
        let mut rx = h.coord.events().subscribe();

        assert!(h.coord.close_pane(PaneSide::Right));
        assert_eq!(h.coord.active_side(), PaneSide::Third);
        assert!(drain(&mut rx)
            .iter()
            .any(|e| matches!(e, UiEvent::ActiveSideChanged(PaneSide::Third))));
        assert!(h.coord.host().calls.contains(&HostCall::Focus(PaneSide::Third)));
    }

    #[test]
    fn closing_last_secondary_returns_to_left() {
        let mut h = harness();
        h.coord.open_pane(PaneSide::Third, None);
        h.coord.set_active_side(PaneSide::Third);
        h.coord.close_pane(PaneSide::Third);
        assert_eq!(h.coord.active_side(), PaneSide::Left);
        assert_eq!(h.coord.layout().panes.len(), 1);
    }

    #[test]
    fn reopen_keeps_surface_but_forgets_provider() {
        let mut h = harness();
        h.coord.open_pane(PaneSide::Right, Some(id("gemini")));
        h.coord.close_pane(PaneSide::Right);
        assert_eq!(h.coord.provider(PaneSide::Right), None);

        h.coord.open_pane(PaneSide::Right, Some(id("gemini")));
        // chatgpt in Left plus one gemini surface in Right.
        assert_eq!(h.coord.host().surface_count(), 2);
    }

    #[test]
    fn close_all_reports_closed_sides() {
        let mut h = harness();
        h.coord.open_pane(PaneSide::Right, None);
        h.coord.open_pane(PaneSide::Third, None);
        assert_eq!(h.coord.close_all(), vec![PaneSide::Right, PaneSide::Third]);
        assert!(h.coord.close_all().is_empty());
    }

    #[test]
    fn closing_left_resets_to_default_provider() {
        let mut h = harness();
        h.coord.select_provider(PaneSide::Left, id("gemini"));
        assert!(h.coord.close_pane(PaneSide::Left));
        assert_eq!(h.coord.provider(PaneSide::Left), Some(&id("chatgpt")));
    }

    // -- Cycling and tab lock --

    #[test]
    fn cycling_left_rerenders_tab_bar() {
        let mut h = harness();
        let mut rx = h.coord.events().subscribe();
        assert_eq!(h.coord.cycle(CycleDirection::Forward), Some(id("claude")));
        assert_eq!(h.coord.provider(PaneSide::Left), Some(&id("claude")));

        let events = drain(&mut rx);
        assert!(events.iter().any(|e| matches!(
            e,
            UiEvent::ProviderHighlightChanged { pane: PaneSide::Left, full_rerender: true, .. }
        )));
    }

    #[test]
    fn cycling_follows_the_tab_lock() {
        let mut h = harness();
        h.coord.open_pane(PaneSide::Right, None);
        assert_eq!(h.coord.toggle_tab_lock(PaneSide::Right), Some(PaneSide::Right));
        let mut rx = h.coord.events().subscribe();

        h.coord.cycle(CycleDirection::Forward);
        assert_eq!(h.coord.provider(PaneSide::Right), Some(&id("gemini")));
        assert_eq!(h.coord.provider(PaneSide::Left), Some(&id("chatgpt")));
        assert!(drain(&mut rx).iter().any(|e| matches!(
            e,
            UiEvent::ProviderHighlightChanged { pane: PaneSide::Right, full_rerender: false, .. }
        )));
    }

    #[test]
    fn cycling_round_trip_restores_provider() {
        let mut h = harness();
        h.coord.cycle(CycleDirection::Forward);
        h.coord.cycle(CycleDirection::Backward);
        assert_eq!(h.coord.provider(PaneSide::Left), Some(&id("chatgpt")));
    }

    #[test]
    fn tab_lock_latch_is_persisted() {
        let mut h = harness();
        h.coord.toggle_tab_lock(PaneSide::Third);
        assert_eq!(
            h.settings.borrow().saved.as_ref().unwrap().tab_lock(),
            Some(PaneSide::Third)
        );
        assert_eq!(h.coord.toggle_tab_lock(PaneSide::Third), None);
        assert!(h.settings.borrow().saved.as_ref().unwrap().tab_lock().is_none());
        assert_eq!(h.settings.borrow().writes, 2);
    }

    #[test]
    fn persisted_tab_lock_is_restored() {
        let mut config = TrioConfig::default();
        config.panes.set_tab_lock(Some(PaneSide::Right));
        let h = harness_with(config, MemoryStore::new());
        assert_eq!(h.coord.panes().tab_lock(), Some(PaneSide::Right));
    }

    // -- Overlay --

    #[test]
    fn nested_overlays_balance_and_reattach() {
        let mut h = harness();
        h.coord.open_pane(PaneSide::Right, None);
        assert_eq!(h.coord.enter_overlay(), 1);
        assert!(h.coord.cache().attached_sides().is_empty());
        assert_eq!(h.coord.enter_overlay(), 2);

        assert_eq!(h.coord.exit_overlay(), 1);
        assert!(h.coord.cache().attached_sides().is_empty());
        assert_eq!(h.coord.exit_overlay(), 0);
        assert_eq!(
            h.coord.cache().attached_sides(),
            vec![PaneSide::Left, PaneSide::Right]
        );
        assert_eq!(h.coord.exit_overlay(), 0);
        assert_eq!(h.coord.panes().overlay_depth(), 0);

        let calls = &h.coord.host().calls;
        assert_eq!(calls.iter().filter(|c| **c == HostCall::EnterOverlay).count(), 1);
        assert_eq!(calls.iter().filter(|c| **c == HostCall::ExitOverlay).count(), 1);
    }

    #[test]
    fn switching_under_overlay_stays_hidden() {
        let mut h = harness();
        h.coord.enter_overlay();
        h.coord.select_provider(PaneSide::Left, id("claude"));
        assert!(h.coord.cache().attached_sides().is_empty());
        h.coord.exit_overlay();
        assert_eq!(h.coord.cache().attached_provider(PaneSide::Left), Some(&id("claude")));
    }

    #[test]
    fn divider_is_inert_under_overlay() {
        let mut h = harness();
        h.coord.open_pane(PaneSide::Right, None);
        h.coord.enter_overlay();
        assert!(!h.coord.pointer_down(630.0, 100.0));
    }

    // -- Auth gate --

    #[test]
    fn gated_provider_waits_for_verdict() {
        let mut h = harness();
        h.coord.open_pane(PaneSide::Right, Some(id("perplexity")));
        assert_eq!(h.coord.host().creates(), 1);
        assert!(h.coord.cache().attached_provider(PaneSide::Right).is_none());

        let tickets = h.coord.take_auth_requests();
        assert_eq!(tickets.len(), 1);
        assert!(h.coord.complete_auth(tickets[0].clone(), AuthVerdict::Authorized));
        assert_eq!(
            h.coord.cache().attached_provider(PaneSide::Right),
            Some(&id("perplexity"))
        );
        assert!(h.coord.take_auth_requests().is_empty());
    }

    #[test]
    fn denied_verdict_blocks_pane_until_retry() {
        let mut h = harness();
        h.coord.open_pane(PaneSide::Right, Some(id("claude")));
        h.coord.select_provider(PaneSide::Right, id("perplexity"));
        let ticket = h.coord.take_auth_requests().remove(0);
        h.coord.complete_auth(ticket, AuthVerdict::Denied);

        assert_eq!(
            h.coord.notice(PaneSide::Right),
            Some(&PaneNotice::AuthRequired {
                provider: id("perplexity")
            })
        );
        // Claude's surface is no longer shown, and no perplexity surface exists.
        assert!(h.coord.cache().attached_provider(PaneSide::Right).is_none());
        assert!(h.coord.cache().handle(PaneSide::Right, &id("perplexity")).is_none());

        assert!(h.coord.retry(PaneSide::Right));
        let ticket = h.coord.take_auth_requests().remove(0);
        h.coord.complete_auth(ticket, AuthVerdict::Authorized);
        assert!(h.coord.notice(PaneSide::Right).is_none());
    }

    #[test]
    fn stale_verdict_is_discarded() {
        let mut h = harness();
        h.coord.select_provider(PaneSide::Left, id("perplexity"));
        let stale = h.coord.take_auth_requests().remove(0);
        h.coord.select_provider(PaneSide::Left, id("claude"));

        assert!(!h.coord.complete_auth(stale, AuthVerdict::Authorized));
        assert_eq!(h.coord.cache().attached_provider(PaneSide::Left), Some(&id("claude")));
    }

    #[test]
    fn closing_pane_drops_pending_auth() {
        let mut h = harness();
        h.coord.open_pane(PaneSide::Third, Some(id("perplexity")));
        h.coord.close_pane(PaneSide::Third);
        assert!(h.coord.take_auth_requests().is_empty());
    }

    // -- Host failures --

    #[test]
    fn creation_failure_shows_retryable_notice() {
        let mut h = harness();
        h.coord.host_mut().fail_creates = true;
        let mut rx = h.coord.events().subscribe();
        h.coord.open_pane(PaneSide::Right, None);

        assert!(h.coord.panes().is_open(PaneSide::Right));
        assert!(matches!(
            h.coord.notice(PaneSide::Right),
            Some(PaneNotice::SurfaceCreationFailed { provider, .. }) if provider == &id("claude")
        ));
        assert!(drain(&mut rx)
            .iter()
            .any(|e| matches!(e, UiEvent::PaneNotice { pane: PaneSide::Right, .. })));

        h.coord.host_mut().fail_creates = false;
        assert!(h.coord.dispatch(Action::RetryPane(PaneSide::Right)));
        assert!(h.coord.notice(PaneSide::Right).is_none());
        assert_eq!(h.coord.cache().attached_provider(PaneSide::Right), Some(&id("claude")));
    }

    #[test]
    fn retry_active_pane_targets_focused_side() {
        let mut h = harness();
        h.coord.host_mut().fail_creates = true;
        h.coord.open_pane(PaneSide::Right, None);
        h.coord.dispatch(Action::FocusPane(PaneSide::Right));
        assert!(h.coord.notice(PaneSide::Right).is_some());

        h.coord.host_mut().fail_creates = false;
        assert!(h.coord.dispatch(Action::RetryActivePane));
        assert!(h.coord.notice(PaneSide::Right).is_none());
        assert_eq!(h.coord.cache().attached_provider(PaneSide::Right), Some(&id("claude")));
    }

    #[test]
    fn retry_active_pane_without_notice_is_unhandled() {
        let mut h = harness();
        assert!(!h.coord.dispatch(Action::RetryActivePane));
    }

    // -- Geometry --

    #[test]
    fn drag_persists_ratios_on_release() {
        let mut h = harness();
        h.coord.open_pane(PaneSide::Right, None);

        assert!(h.coord.pointer_down(630.0, 100.0));
        assert!(h.coord.pointer_move(744.0));
        assert_eq!(h.settings.borrow().writes, 0);
        assert!(h.coord.pointer_up());

        let saved = h.settings.borrow().saved.clone().unwrap();
        assert!((saved.split_ratio - 0.6).abs() < 1e-9);
        assert!((h.coord.layout().dividers[0].center_x - 744.0).abs() < 1e-9);
        assert!(!h.coord.pointer_up());
    }

    #[test]
    fn three_pane_scenario_layout() {
        let mut h = harness();
        h.coord.open_pane(PaneSide::Right, None);
        h.coord.open_pane(PaneSide::Third, None);
        h.coord.window_resized(1260.0, 800.0);

        let layout = h.coord.layout();
        for (_, rect) in &layout.panes {
            assert!((rect.width - 384.0).abs() < 1e-9);
        }
        assert!((layout.dividers[0].center_x - 456.0).abs() < 1e-9);
        assert!((layout.dividers[1].center_x - 864.0).abs() < 1e-9);
        assert!(h.coord.host().calls.contains(&HostCall::Resize {
            side: PaneSide::Third,
            rect: layout.rect(PaneSide::Third).unwrap(),
        }));

        let inset = TrioConfig::default().layout.address_inset;
        let third = layout.rect(PaneSide::Third).unwrap();
        let bar = layout.address_bar(PaneSide::Third).unwrap();
        assert!((bar.x - (third.x + inset)).abs() < 1e-9);
        assert!((bar.width - (384.0 - 2.0 * inset)).abs() < 1e-9);
    }

    #[test]
    fn geometry_event_carries_address_bounds() {
        let mut h = harness();
        let mut rx = h.coord.events().subscribe();
        h.coord.open_pane(PaneSide::Right, None);
        h.coord.open_pane(PaneSide::Third, None);
        h.coord.window_resized(1260.0, 800.0);

        let inset = TrioConfig::default().layout.address_inset;
        let last = drain(&mut rx)
            .into_iter()
            .filter_map(|e| match e {
                UiEvent::PaneGeometryChanged(rects) => Some(rects),
                _ => None,
            })
            .last()
            .unwrap();
        assert_eq!(last.len(), 3);
        for pane in &last {
            assert!((pane.address.x - (pane.rect.x + inset)).abs() < 1e-9);
            assert!((pane.address.width - (pane.rect.width - 2.0 * inset)).abs() < 1e-9);
        }
        let middle = last.iter().find(|p| p.side == PaneSide::Right).unwrap();
        assert_eq!(
            Some(middle.address),
            h.coord.layout().address_bar(PaneSide::Right)
        );
    }

    #[test]
    fn tiny_window_degrades_without_panicking() {
        let mut h = harness();
        h.coord.open_pane(PaneSide::Right, None);
        h.coord.window_resized(40.0, 300.0);
        assert!(h.coord.layout().degenerate);
        assert!(h.coord.panes().is_open(PaneSide::Right));
    }

    #[test]
    fn sidebar_reports_are_debounced() {
        let mut h = harness();
        let t0 = Instant::now();
        assert!(!h.coord.report_sidebar_width(61.0, t0));
        assert!(h.coord.report_sidebar_width(90.0, t0));
        assert!(!h.coord.report_sidebar_width(120.0, t0 + Duration::from_millis(100)));
        assert!((h.coord.metrics().sidebar_width - 90.0).abs() < f64::EPSILON);
        assert!((h.coord.layout().panes[0].1.x - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn sidebar_lock_is_persisted() {
        let mut h = harness();
        h.coord.set_sidebar_lock(true);
        assert!(h.settings.borrow().saved.as_ref().unwrap().sidebar_width_lock);
        assert!(!h.coord.report_sidebar_width(200.0, Instant::now()));
    }

    #[test]
    fn sidebar_lock_action_toggles_and_persists() {
        let mut h = harness();
        assert!(h.coord.sidebar_edge_at(60.0));
        assert!(h.coord.dispatch(Action::ToggleSidebarLock));
        assert!(h.coord.is_sidebar_locked());
        assert!(h.settings.borrow().saved.as_ref().unwrap().sidebar_width_lock);
        assert!(!h.coord.sidebar_edge_at(60.0));
        assert!(!h.coord.report_sidebar_width(200.0, Instant::now()));

        assert!(h.coord.dispatch(Action::ToggleSidebarLock));
        assert!(!h.settings.borrow().saved.as_ref().unwrap().sidebar_width_lock);
        assert!(h.coord.report_sidebar_width(200.0, Instant::now()));
    }

    #[test]
    fn align_toggles_and_restores() {
        let mut config = TrioConfig::default();
        config.panes.split_ratio = 0.7;
        let mut h = harness_with(config, MemoryStore::new());

        assert!(h.coord.toggle_align());
        assert!((h.coord.ratios().split_ratio - 0.5).abs() < f64::EPSILON);
        assert!(!h.coord.toggle_align());
        assert!((h.coord.ratios().split_ratio - 0.7).abs() < f64::EPSILON);
        assert_eq!(h.settings.borrow().writes, 0);
    }

    #[test]
    fn drag_ends_align_mode() {
        let mut h = harness();
        h.coord.open_pane(PaneSide::Right, None);
        h.coord.toggle_align();
        h.coord.pointer_down(630.0, 10.0);
        h.coord.pointer_move(700.0);
        h.coord.pointer_up();
        assert!(!h.coord.is_aligned());
    }

    // -- Navigation, history, favorites --

    #[test]
    fn left_history_records_deep_links_only() {
        let mut h = harness();
        h.coord.select_provider(PaneSide::Left, id("claude"));
        assert!(!h.coord.on_navigation(PaneSide::Left, "https://claude.ai/new", None));
        assert!(h.coord.on_navigation(PaneSide::Left, CLAUDE_CHAT, Some("Lifetimes - Claude")));

        let store = h.store.borrow();
        assert_eq!(store.data.history.len(), 1);
        assert_eq!(store.data.history[0].title, "Lifetimes");
        assert_eq!(
            h.coord.panes().pane(PaneSide::Left).last_known_url.as_deref(),
            Some(CLAUDE_CHAT)
        );
    }

    #[test]
    fn secondary_history_records_every_page() {
        let mut h = harness();
        h.coord.open_pane(PaneSide::Right, None);
        h.coord.on_surface_event(SurfaceEvent::PageLoad {
            side: PaneSide::Right,
            provider: id("claude"),
            state: PageLoadState::Finished,
            url: "https://claude.ai/new".into(),
        });
        h.coord.on_surface_event(SurfaceEvent::TitleChanged {
            side: PaneSide::Right,
            provider: id("claude"),
            title: "New chat - Claude".into(),
        });

        let store = h.store.borrow();
        assert_eq!(store.data.history.len(), 1);
        assert_eq!(store.data.history[0].title, "New chat - Claude");
        assert!(store.data.history[0].preserve_title);
    }

    #[test]
    fn title_changes_update_entries_in_place() {
        let mut h = harness();
        h.coord.select_provider(PaneSide::Left, id("claude"));
        h.coord.open_pane(PaneSide::Right, None);
        h.coord.on_surface_event(SurfaceEvent::PageLoad {
            side: PaneSide::Right,
            provider: id("claude"),
            state: PageLoadState::Finished,
            url: "https://claude.ai/new".into(),
        });
        h.coord.on_surface_event(SurfaceEvent::PageLoad {
            side: PaneSide::Left,
            provider: id("claude"),
            state: PageLoadState::Finished,
            url: CLAUDE_CHAT.into(),
        });
        for title in ["Claude", "Packing list", "Packing list - Claude"] {
            h.coord.on_surface_event(SurfaceEvent::TitleChanged {
                side: PaneSide::Right,
                provider: id("claude"),
                title: title.into(),
            });
        }
        h.coord.on_surface_event(SurfaceEvent::TitleChanged {
            side: PaneSide::Left,
            provider: id("claude"),
            title: "Generics - Claude".into(),
        });

        let store = h.store.borrow();
        assert_eq!(store.data.history.len(), 2);
        let right = store
            .data
            .history
            .iter()
            .find(|e| e.pane == PaneSide::Right)
            .unwrap();
        assert_eq!(right.title, "Packing list - Claude");
        let left = store
            .data
            .history
            .iter()
            .find(|e| e.pane == PaneSide::Left)
            .unwrap();
        assert_eq!(left.title, "Generics");
        assert_eq!(
            h.coord.panes().pane(PaneSide::Right).last_known_title.as_deref(),
            Some("Packing list - Claude")
        );
    }

    #[test]
    fn hidden_surface_navigation_does_not_touch_pane() {
        let mut h = harness();
        h.coord.select_provider(PaneSide::Left, id("claude"));
        h.coord.select_provider(PaneSide::Left, id("chatgpt"));
        h.coord
            .on_surface_navigation(PaneSide::Left, &id("claude"), CLAUDE_CHAT, None);

        assert_eq!(h.coord.panes().pane(PaneSide::Left).last_known_url, None);
        assert_eq!(h.coord.cache().last_url(PaneSide::Left, &id("claude")), Some(CLAUDE_CHAT));
    }

    #[test]
    fn remembered_url_seeds_secondary_cycling_guess() {
        let mut h = harness();
        h.coord.open_pane(PaneSide::Right, None);
        h.coord.on_navigation(PaneSide::Right, CLAUDE_CHAT, None);
        h.coord.select_provider(PaneSide::Right, id("gemini"));
        h.coord.select_provider(PaneSide::Right, id("claude"));
        assert_eq!(
            h.coord.panes().pane(PaneSide::Right).last_known_url.as_deref(),
            Some(CLAUDE_CHAT)
        );
    }

    #[test]
    fn storage_outage_never_blocks_navigation() {
        let mut h = harness_with(TrioConfig::default(), MemoryStore::unavailable());
        h.coord.select_provider(PaneSide::Left, id("claude"));
        assert!(!h.coord.on_navigation(PaneSide::Left, CLAUDE_CHAT, None));
        assert_eq!(
            h.coord.panes().pane(PaneSide::Left).last_known_url.as_deref(),
            Some(CLAUDE_CHAT)
        );
        assert!(!h.coord.add_favorite(PaneSide::Left));
        assert!(h.coord.favorites().is_empty());
    }

    #[test]
    fn favorite_uses_last_page() {
        let mut h = harness();
        assert!(!h.coord.add_favorite(PaneSide::Left));

        h.coord.select_provider(PaneSide::Left, id("claude"));
        h.coord
            .on_navigation(PaneSide::Left, CLAUDE_CHAT, Some("Traits - Claude"));
        assert!(h.coord.dispatch(Action::AddFavorite));

        let favorites = h.coord.favorites();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].url, CLAUDE_CHAT);
        assert_eq!(favorites[0].title, "Traits");
    }

    #[test]
    fn custom_provider_from_store_is_selectable() {
        let mut store = MemoryStore::new();
        store.data.custom_providers.push(CustomProvider {
            id: id("local"),
            label: "Local".into(),
            base_url: "http://localhost:8080".into(),
            home_url: None,
            icon_ref: None,
        });
        let mut h = harness_with(TrioConfig::default(), store);
        assert!(h.coord.select_provider(PaneSide::Left, id("local")));
        assert!(h.coord.host().calls.contains(&HostCall::Create {
            side: PaneSide::Left,
            provider: id("local"),
            url: "http://localhost:8080".into(),
        }));
    }

    // -- Dispatch --

    #[test]
    fn dispatch_passes_through_unconsumed_keys() {
        let mut h = harness();
        assert!(!h.coord.dispatch(Action::ExitOverlay));
        assert!(!h.coord.dispatch(Action::Quit));
        h.coord.dispatch(Action::ToggleOverlay);
        assert!(!h.coord.dispatch(Action::Cycle(CycleDirection::Forward)));
        assert!(h.coord.dispatch(Action::ExitOverlay));
        assert_eq!(h.coord.panes().overlay_depth(), 0);
    }

    #[test]
    fn dispatch_open_activates_pane() {
        let mut h = harness();
        h.coord.dispatch(Action::OpenPane(PaneSide::Third));
        assert_eq!(h.coord.active_side(), PaneSide::Third);
        h.coord.dispatch(Action::FocusPane(PaneSide::Left));
        assert_eq!(h.coord.active_side(), PaneSide::Left);
    }

    #[test]
    fn dispatch_select_opens_closed_secondary() {
        let mut h = harness();
        h.coord.dispatch(Action::SelectProvider {
            pane: PaneSide::Right,
            provider: "copilot".into(),
        });
        assert!(h.coord.panes().is_open(PaneSide::Right));
        assert_eq!(h.coord.provider(PaneSide::Right), Some(&id("copilot")));
    }
}
