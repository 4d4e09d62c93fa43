mod app_state;
mod cli;

use std::path::PathBuf;

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;
use trio_common::{Action, CycleDirection};
use trio_config::TrioConfig;
use winit::event_loop::EventLoop;

const DEFAULT_LOG_DIRECTIVE: &str = "info";

/// Load the config named on the command line, or the platform default.
/// Returns the path pane settings are written back to, if one is known.
fn load_config(args: &cli::Args) -> (TrioConfig, Option<PathBuf>, Option<String>) {
    let (result, path) = match &args.config {
        Some(path) => {
            let path = PathBuf::from(path);
            (trio_config::load_config_from(&path), Some(path))
        }
        None => (
            trio_config::load_config(),
            trio_platform::config_file().ok(),
        ),
    };
    match result {
        Ok(config) => (config, path, None),
        Err(e) => (TrioConfig::default(), path, Some(e.to_string())),
    }
}

fn main() {
    let args = cli::parse();
    let (config, config_path, config_error) = load_config(&args);

    // Initialize logging
    let log_directive = args
        .log_level
        .as_deref()
        .unwrap_or(config.logging.level.as_directive());
    let directive: Directive = log_directive.parse().unwrap_or_else(|_| {
        DEFAULT_LOG_DIRECTIVE
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into())
    });
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();

    tracing::info!("Trio v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    if let Some(ref path) = config_path {
        tracing::info!(path = %path.display(), "Config path");
    }

    if let Err(e) = trio_platform::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    let registry = trio_platform::KeybindRegistry::from_config(&config.keybinds);
    tracing::info!("Keybind registry loaded ({} bindings)", registry.len());
    if let Some(kb) = registry.keybind_for_action(&Action::Cycle(CycleDirection::Forward)) {
        tracing::debug!("Provider cycling bound to {kb}");
    }
    tracing::debug!(config = %trio_config::config_to_json(&config), "Effective config");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::TrioApp::new(config, config_path, registry);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
