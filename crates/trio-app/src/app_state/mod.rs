//! Application state: winit handler driving the pane coordinator.

mod auth;
mod core;
mod event_handler;
mod init;
mod polling;
mod shutdown;
mod title;

pub use self::core::TrioApp;
