//! TrioApp struct definition and constructor.

use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::broadcast;
use winit::window::Window;

use trio_common::UiEvent;
use trio_config::TrioConfig;
use trio_coordinator::Coordinator;
use trio_platform::KeybindRegistry;
use trio_webview::{AuthGate, AuthVerdict, SwitchTicket, WryHost};

use super::auth::EnvAuthGate;

pub(super) type AppCoordinator = Coordinator<WryHost<Arc<Window>>>;

/// Top-level application state.
pub struct TrioApp {
    pub(super) config: TrioConfig,
    pub(super) config_path: Option<PathBuf>,
    pub(super) registry: KeybindRegistry,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // Pane state, created once the window exists
    pub(super) coordinator: Option<AppCoordinator>,
    pub(super) ui_events: Option<broadcast::Receiver<UiEvent>>,

    // Modifier tracking (winit sends these separately)
    pub(super) modifiers: winit::keyboard::ModifiersState,
    /// Last cursor position in logical pixels.
    pub(super) cursor_pos: (f64, f64),
    /// Set while the sidebar edge is being dragged.
    pub(super) sidebar_drag: bool,

    // Authorization checks run on the runtime, verdicts come back over mpsc
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,
    pub(super) gate: Arc<dyn AuthGate>,
    pub(super) auth_tx: mpsc::Sender<(SwitchTicket, AuthVerdict)>,
    pub(super) auth_rx: mpsc::Receiver<(SwitchTicket, AuthVerdict)>,

    // Whether the app should exit
    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl TrioApp {
    pub fn new(config: TrioConfig, config_path: Option<PathBuf>, registry: KeybindRegistry) -> Self {
        let (auth_tx, auth_rx) = mpsc::channel();
        Self {
            config,
            config_path,
            registry,
            window: None,
            coordinator: None,
            ui_events: None,
            modifiers: winit::keyboard::ModifiersState::empty(),
            cursor_pos: (0.0, 0.0),
            sidebar_drag: false,
            tokio_runtime: None,
            gate: Arc::new(EnvAuthGate::from_env()),
            auth_tx,
            auth_rx,
            should_exit: false,
            last_poll: Instant::now(),
        }
    }
}
