//! Coordinator struct definition and constructor.

use std::collections::HashMap;

use trio_common::{EventBus, PaneNotice, PaneSide, ProviderId, UiEvent};
use trio_config::schema::{PaneSettings, ProvidersConfig};
use trio_config::{SettingsSink, Storage, TrioConfig};
use trio_tiling::{
    DividerController, GeometryEngine, PaneLayout, PaneStateMachine, SidebarDebounce, SplitRatios,
    WindowMetrics,
};
use trio_webview::{SurfaceHost, SwitchGenerations, SwitchTicket, ViewCache};

use crate::history::HistoryBridge;
use crate::providers::ProviderRegistry;

/// Owns every piece of mutable pane state. All changes go through its
/// operations, which run synchronously on the UI thread.
pub struct Coordinator<H: SurfaceHost> {
    pub(super) registry: ProviderRegistry,
    pub(super) panes: PaneStateMachine,

    // Geometry
    pub(super) engine: GeometryEngine,
    pub(super) metrics: WindowMetrics,
    pub(super) ratios: SplitRatios,
    /// Ratios to restore when align mode is switched off.
    pub(super) align_backup: Option<SplitRatios>,
    pub(super) layout: PaneLayout,
    pub(super) divider: DividerController,
    pub(super) sidebar: SidebarDebounce,

    // Surfaces
    pub(super) host: H,
    pub(super) cache: ViewCache,
    pub(super) generations: SwitchGenerations,
    pub(super) pending_auth: Vec<SwitchTicket>,
    pub(super) notices: HashMap<PaneSide, PaneNotice>,

    // Collaborators
    pub(super) store: Box<dyn Storage>,
    pub(super) settings: Box<dyn SettingsSink>,
    pub(super) pane_settings: PaneSettings,
    pub(super) defaults: ProvidersConfig,
    pub(super) history: HistoryBridge,
    pub(super) event_bus: EventBus,
}

impl<H: SurfaceHost> Coordinator<H> {
    pub fn new(
        config: &TrioConfig,
        host: H,
        store: Box<dyn Storage>,
        settings: Box<dyn SettingsSink>,
    ) -> Self {
        let registry = ProviderRegistry::from_store(store.as_ref());
        let engine = GeometryEngine {
            min_pane_width: config.layout.min_pane_width,
            gutter: config.layout.gutter,
            address_inset: config.layout.address_inset,
        };
        let metrics = WindowMetrics {
            width: 0.0,
            height: 0.0,
            sidebar_width: config.layout.sidebar_width,
            top_offset: config.layout.address_bar_height,
        };
        let ratios = SplitRatios {
            split_ratio: config.panes.split_ratio,
            r1: config.panes.three_split_r1,
            r2: config.panes.three_split_r2,
        };

        let mut panes = PaneStateMachine::new();
        panes.restore_tab_lock(config.panes.tab_lock());
        panes.pane_mut(PaneSide::Left).active_provider =
            registry.resolve_or_first(&config.providers.default_left);

        Self {
            registry,
            panes,
            engine,
            metrics,
            ratios,
            align_backup: None,
            layout: PaneLayout::default(),
            divider: DividerController::new(),
            sidebar: SidebarDebounce::new(
                config.layout.sidebar_width,
                config.panes.sidebar_width_lock,
            ),
            host,
            cache: ViewCache::new(),
            generations: SwitchGenerations::new(),
            pending_auth: Vec::new(),
            notices: HashMap::new(),
            store,
            settings,
            pane_settings: config.panes.clone(),
            defaults: config.providers.clone(),
            history: HistoryBridge::new(config.history.enabled),
            event_bus: EventBus::new(256),
        }
    }

    /// Lay out a `width` x `height` window and show the Left provider.
    pub fn start(&mut self, width: f64, height: f64) {
        self.metrics.width = width;
        self.metrics.height = height;
        self.relayout();
        if let Some(provider) = self.panes.pane(PaneSide::Left).active_provider.clone() {
            self.select_provider(PaneSide::Left, provider);
        }
        tracing::info!(width, height, "coordinator started");
    }

    // -- Accessors --

    pub fn events(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn panes(&self) -> &PaneStateMachine {
        &self.panes
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    pub fn layout(&self) -> &PaneLayout {
        &self.layout
    }

    pub fn ratios(&self) -> SplitRatios {
        self.ratios
    }

    pub fn metrics(&self) -> WindowMetrics {
        self.metrics
    }

    pub fn cache(&self) -> &ViewCache {
        &self.cache
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn pane_settings(&self) -> &PaneSettings {
        &self.pane_settings
    }

    pub fn notice(&self, side: PaneSide) -> Option<&PaneNotice> {
        self.notices.get(&side)
    }

    pub fn is_aligned(&self) -> bool {
        self.align_backup.is_some()
    }

    /// Provider shown (or being switched to) in `side`.
    pub fn provider(&self, side: PaneSide) -> Option<&ProviderId> {
        self.panes.pane(side).active_provider.as_ref()
    }

    /// Auth checks requested since the last call, for the async runtime.
    pub fn take_auth_requests(&mut self) -> Vec<SwitchTicket> {
        std::mem::take(&mut self.pending_auth)
    }

    pub(super) fn publish(&self, event: UiEvent) {
        self.event_bus.publish(event);
    }

    /// Write the `[panes]` settings. Failures are logged.
    pub(super) fn persist_settings(&mut self) {
        if let Err(e) = self.settings.persist(&self.pane_settings) {
            tracing::warn!(error = %e, "failed to persist pane settings");
        }
    }
}
