//! Window, surface host and coordinator initialization.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use trio_config::{MemoryStore, MemorySettings, SettingsSink, Storage, TomlSettings};
use trio_coordinator::Coordinator;
use trio_webview::wry_host::SurfaceConfig;
use trio_webview::WryHost;

use super::core::TrioApp;

const INITIAL_WIDTH: f64 = 1280.0;
const INITIAL_HEIGHT: f64 = 800.0;

impl TrioApp {
    /// Initialize window, surfaces and pane state. Returns false on fatal error.
    pub(super) fn initialize(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title("Trio")
            .with_inner_size(LogicalSize::new(INITIAL_WIDTH, INITIAL_HEIGHT));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let host = WryHost::new(window.clone(), SurfaceConfig::default());
        let store = self.open_store();
        let settings = self.settings_sink();

        let mut coordinator = Coordinator::new(&self.config, host, store, settings);
        self.ui_events = Some(coordinator.events().subscribe());

        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        coordinator.start(size.width, size.height);
        tracing::info!(
            width = size.width,
            height = size.height,
            providers = coordinator.registry().ordered().len(),
            "Coordinator started"
        );

        self.coordinator = Some(coordinator);
        self.window = Some(window);
        self.start_runtime();
        self.update_window_title();
        true
    }

    /// History and favorites store. An unreadable store degrades to memory so
    /// the panes still work.
    fn open_store(&self) -> Box<dyn Storage> {
        let cap = self.config.history.max_entries as usize;
        let opened = trio_platform::store_file()
            .map_err(|e| e.to_string())
            .and_then(|path| trio_config::JsonStore::open(path, cap).map_err(|e| e.to_string()));
        match opened {
            Ok(store) => {
                tracing::info!(path = %store.path().display(), "History store opened");
                Box::new(store)
            }
            Err(e) => {
                tracing::warn!("History store unavailable, keeping history in memory: {e}");
                Box::new(MemoryStore::new())
            }
        }
    }

    fn settings_sink(&self) -> Box<dyn SettingsSink> {
        match &self.config_path {
            Some(path) => Box::new(TomlSettings::new(path.clone(), self.config.clone())),
            None => {
                tracing::warn!("No config path, pane settings will not be persisted");
                Box::new(MemorySettings::default())
            }
        }
    }

    fn start_runtime(&mut self) {
        match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("trio-auth")
            .enable_all()
            .build()
        {
            Ok(rt) => self.tokio_runtime = Some(rt),
            Err(e) => tracing::warn!("Failed to create tokio runtime, gated providers stay blocked: {e}"),
        }
    }
}
