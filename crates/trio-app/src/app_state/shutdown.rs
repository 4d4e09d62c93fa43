//! Graceful shutdown: stop auth checks, then drop surfaces and the window.

use std::time::Duration;

use super::core::TrioApp;

impl TrioApp {
    /// Order matters:
    /// 1. Shut down the runtime so no verdict arrives for a dropped pane
    /// 2. Drop the coordinator, which owns every surface
    /// 3. Release the window
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }
        while self.auth_rx.try_recv().is_ok() {}

        self.ui_events = None;
        self.coordinator = None;
        self.window = None;

        tracing::info!("Graceful shutdown complete");
    }
}
