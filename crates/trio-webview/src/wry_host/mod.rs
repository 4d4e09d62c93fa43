//! [`SurfaceHost`] backed by child `wry` webviews.
//!
//! Every surface is a child webview of the main window. Detaching hides it;
//! attaching shows it again at the pane's last known bounds. Page-load,
//! title and navigation callbacks push [`SurfaceEvent`]s into a shared sink
//! that the event loop drains.

mod bounds;
mod handlers;
mod surface;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};
use trio_common::{HostError, PaneSide, ProviderId, Rect};
use wry::raw_window_handle::HasWindowHandle;
use wry::WebViewBuilder;

use crate::events::SurfaceEvent;
use crate::host::{SurfaceHandle, SurfaceHost};

pub use bounds::pane_rect_to_wry;
pub use handlers::{is_navigation_allowed, ALLOWED_NAV_PREFIXES};

use handlers::EventSink;
use surface::Surface;

/// Builder options shared by every surface.
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    pub devtools: bool,
    /// `None` keeps the platform webview's own user agent.
    pub user_agent: Option<String>,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            devtools: cfg!(debug_assertions),
            user_agent: None,
        }
    }
}

pub struct WryHost<W: HasWindowHandle> {
    window: W,
    config: SurfaceConfig,
    surfaces: HashMap<(ProviderId, PaneSide), Surface>,
    attached: HashMap<PaneSide, ProviderId>,
    bounds: HashMap<PaneSide, Rect>,
    events: EventSink,
    next_handle: u64,
}

impl<W: HasWindowHandle> WryHost<W> {
    pub fn new(window: W, config: SurfaceConfig) -> Self {
        Self {
            window,
            config,
            surfaces: HashMap::new(),
            attached: HashMap::new(),
            bounds: HashMap::new(),
            events: Arc::new(Mutex::new(Vec::new())),
            next_handle: 0,
        }
    }

    /// Take every event pushed by surface callbacks since the last call.
    pub fn drain_events(&self) -> Vec<SurfaceEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }

    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    fn pane_bounds(&self, side: PaneSide) -> Rect {
        self.bounds.get(&side).copied().unwrap_or_default()
    }

    fn create(
        &mut self,
        side: PaneSide,
        provider: &ProviderId,
        url: &str,
    ) -> Result<SurfaceHandle, HostError> {
        let rect = self.pane_bounds(side);
        let mut builder = WebViewBuilder::new()
            .with_url(url)
            .with_bounds(pane_rect_to_wry(&rect))
            .with_devtools(self.config.devtools)
            .with_clipboard(true)
            .with_autoplay(true)
            .with_focused(false);

        if let Some(ua) = &self.config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = handlers::attach_page_load_handler(
            builder,
            Arc::clone(&self.events),
            side,
            provider.clone(),
        );
        builder = handlers::attach_title_handler(
            builder,
            Arc::clone(&self.events),
            side,
            provider.clone(),
        );
        builder = handlers::attach_navigation_handler(
            builder,
            Arc::clone(&self.events),
            side,
            provider.clone(),
        );

        let webview = builder
            .build_as_child(&self.window)
            .map_err(|e| HostError::SurfaceCreation {
                pane: side.to_string(),
                provider: provider.to_string(),
                reason: e.to_string(),
            })?;

        self.next_handle += 1;
        let handle = SurfaceHandle(self.next_handle);
        self.surfaces.insert(
            (provider.clone(), side),
            Surface {
                handle,
                webview,
                visible: true,
            },
        );
        info!(pane = %side, provider = %provider, %handle, url, "surface created");
        Ok(handle)
    }

    fn attached_surface(&self, side: PaneSide) -> Result<&Surface, HostError> {
        self.attached
            .get(&side)
            .and_then(|provider| self.surfaces.get(&(provider.clone(), side)))
            .ok_or_else(|| HostError::NoSurface(side.to_string()))
    }
}

fn surface_err(e: wry::Error) -> HostError {
    HostError::Surface(e.to_string())
}

impl<W: HasWindowHandle> SurfaceHost for WryHost<W> {
    fn create_or_attach_surface(
        &mut self,
        side: PaneSide,
        provider: &ProviderId,
        url: Option<&str>,
    ) -> Result<SurfaceHandle, HostError> {
        let rect = self.pane_bounds(side);
        let handle = match self.surfaces.get_mut(&(provider.clone(), side)) {
            Some(surface) => {
                surface.set_bounds(pane_rect_to_wry(&rect)).map_err(surface_err)?;
                surface.set_visible(true).map_err(surface_err)?;
                debug!(pane = %side, provider = %provider, handle = %surface.handle, "surface attached");
                surface.handle
            }
            None => {
                let url = url.ok_or_else(|| HostError::NoSurface(side.to_string()))?;
                self.create(side, provider, url)?
            }
        };
        self.attached.insert(side, provider.clone());
        Ok(handle)
    }

    fn detach_surface(&mut self, side: PaneSide, handle: SurfaceHandle) -> Result<(), HostError> {
        let surface = self
            .surfaces
            .iter_mut()
            .find(|((_, s), surface)| *s == side && surface.handle == handle)
            .map(|(_, surface)| surface)
            .ok_or_else(|| HostError::NoSurface(side.to_string()))?;
        surface.set_visible(false).map_err(surface_err)?;

        if self
            .attached
            .get(&side)
            .is_some_and(|p| self.surfaces.get(&(p.clone(), side)).map(|s| s.handle) == Some(handle))
        {
            self.attached.remove(&side);
        }
        Ok(())
    }

    fn resize_surface(&mut self, side: PaneSide, rect: Rect) -> Result<(), HostError> {
        self.bounds.insert(side, rect);
        match self.attached_surface(side) {
            Ok(surface) => surface.set_bounds(pane_rect_to_wry(&rect)).map_err(surface_err),
            // Bounds are applied when a surface attaches.
            Err(_) => Ok(()),
        }
    }

    fn set_focus(&mut self, side: PaneSide) -> Result<(), HostError> {
        self.attached_surface(side)?.focus().map_err(surface_err)
    }

    fn enter_overlay(&mut self) -> Result<(), HostError> {
        // Keyboard input goes to the overlay drawn by the main window.
        if let Some(surface) = self.surfaces.values().next() {
            surface.focus_parent().map_err(surface_err)?;
        }
        debug!("overlay entered");
        Ok(())
    }

    fn exit_overlay(&mut self) -> Result<(), HostError> {
        if self.attached.is_empty() && !self.surfaces.is_empty() {
            warn!("overlay exited with no surface attached");
        }
        debug!("overlay exited");
        Ok(())
    }
}
