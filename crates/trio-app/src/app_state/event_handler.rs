//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::Key;
use std::time::Instant;

use winit::window::{CursorIcon, WindowId};

use trio_common::Action;
use trio_platform::{normalize_winit_key, KeyCombo};

use super::core::TrioApp;

impl ApplicationHandler for TrioApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize(event_loop) {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                self.sync_window_size();
            }

            WindowEvent::CursorMoved { position, .. } => {
                let scale = self.window.as_ref().map_or(1.0, |w| w.scale_factor());
                let logical = position.to_logical::<f64>(scale);
                self.handle_cursor_moved(logical.x, logical.y);
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.handle_mouse_input(state);
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            self.shutdown();
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl TrioApp {
    /// Resolve a key press to an action and run it.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        let KeyEvent {
            logical_key, state, ..
        } = event;
        if state != ElementState::Pressed {
            return;
        }

        let key_name = match &logical_key {
            Key::Named(named) => format!("{named:?}"),
            Key::Character(c) => c.to_string(),
            _ => return,
        };

        let combo = KeyCombo::from_winit(
            self.modifiers.control_key(),
            self.modifiers.alt_key(),
            self.modifiers.shift_key(),
            self.modifiers.super_key(),
            normalize_winit_key(&key_name),
        );
        let Some(action) = self.registry.lookup(&combo).cloned() else {
            return;
        };

        if action == Action::Quit {
            tracing::info!("Quit requested");
            self.should_exit = true;
            return;
        }

        let Some(coordinator) = self.coordinator.as_mut() else {
            return;
        };
        let handled = coordinator.dispatch(action.clone());
        tracing::debug!(?action, handled, "Keybind dispatched");
    }

    /// Drag the divider or sidebar edge under the pointer, or show a resize
    /// cursor over one.
    fn handle_cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor_pos = (x, y);
        let Some(coordinator) = self.coordinator.as_mut() else {
            return;
        };
        if self.sidebar_drag {
            coordinator.report_sidebar_width(x.max(0.0), Instant::now());
            return;
        }
        if coordinator.pointer_move(x) {
            return;
        }

        let icon = if coordinator.layout().divider_at(x, y).is_some()
            || coordinator.sidebar_edge_at(x)
        {
            CursorIcon::ColResize
        } else {
            CursorIcon::Default
        };
        if let Some(ref w) = self.window {
            w.set_cursor(icon);
        }
    }

    fn handle_mouse_input(&mut self, state: ElementState) {
        let (x, y) = self.cursor_pos;
        let Some(coordinator) = self.coordinator.as_mut() else {
            return;
        };
        match state {
            ElementState::Pressed => {
                if coordinator.pointer_down(x, y) {
                    tracing::debug!(x, y, "Divider drag started");
                } else if coordinator.sidebar_edge_at(x) {
                    self.sidebar_drag = true;
                    tracing::debug!(x, "Sidebar drag started");
                }
            }
            ElementState::Released => {
                if std::mem::take(&mut self.sidebar_drag) {
                    coordinator.report_sidebar_width(x.max(0.0), Instant::now());
                    return;
                }
                if coordinator.pointer_up() {
                    tracing::debug!(ratios = ?coordinator.ratios(), "Divider drag committed");
                }
            }
        }
    }

    fn sync_window_size(&mut self) {
        let (Some(window), Some(coordinator)) = (&self.window, self.coordinator.as_mut()) else {
            return;
        };
        let size = window.inner_size();
        if size.width == 0 || size.height == 0 {
            return;
        }
        let logical = size.to_logical::<f64>(window.scale_factor());
        coordinator.window_resized(logical.width, logical.height);
    }
}
