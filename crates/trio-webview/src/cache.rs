//! Provider -> persistent surface mapping.
//!
//! At most one surface exists per `(provider, pane)`. Switching providers
//! detaches the old surface and attaches (or lazily creates) the new one;
//! nothing is ever destroyed, so sessions and scroll positions survive.

use std::collections::HashMap;

use tracing::{debug, warn};
use trio_common::{HostError, PaneSide, ProviderId};

use crate::host::{SurfaceHandle, SurfaceHost};

/// How [`ViewCache::ensure_active`] satisfied the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// A new surface was created and is loading the URL.
    Created(SurfaceHandle),
    /// A resident surface was attached without navigating.
    Reattached(SurfaceHandle),
    /// The surface was already attached to the pane.
    AlreadyActive(SurfaceHandle),
}

impl Activation {
    pub fn handle(&self) -> SurfaceHandle {
        match self {
            Activation::Created(h) | Activation::Reattached(h) | Activation::AlreadyActive(h) => *h,
        }
    }
}

type Key = (ProviderId, PaneSide);

#[derive(Debug, Default)]
pub struct ViewCache {
    handles: HashMap<Key, SurfaceHandle>,
    /// Surface currently shown in each pane.
    attached: HashMap<PaneSide, (ProviderId, SurfaceHandle)>,
    /// Surfaces hidden for the overlay, restored by `reattach_all`.
    parked: HashMap<PaneSide, (ProviderId, SurfaceHandle)>,
    suspended: bool,
    last_urls: HashMap<Key, String>,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `provider`'s surface the one shown in `side`.
    ///
    /// The previous surface in that pane is detached but kept. While the
    /// cache is suspended for an overlay, the surface is prepared but stays
    /// hidden until [`reattach_all`](Self::reattach_all).
    pub fn ensure_active(
        &mut self,
        host: &mut dyn SurfaceHost,
        side: PaneSide,
        provider: &ProviderId,
        url: &str,
    ) -> Result<Activation, HostError> {
        if self.suspended {
            return self.ensure_parked(host, side, provider, url);
        }

        if let Some((current, handle)) = self.attached.get(&side) {
            if current == provider {
                return Ok(Activation::AlreadyActive(*handle));
            }
        }
        self.detach_pane(host, side);

        let key = (provider.clone(), side);
        if let Some(&handle) = self.handles.get(&key) {
            let attached = host.create_or_attach_surface(side, provider, None)?;
            if attached != handle {
                warn!(pane = %side, provider = %provider, "host returned a different surface on attach");
                self.handles.insert(key, attached);
            }
            self.attached.insert(side, (provider.clone(), attached));
            debug!(pane = %side, provider = %provider, handle = %attached, "surface reattached");
            return Ok(Activation::Reattached(attached));
        }

        let handle = host.create_or_attach_surface(side, provider, Some(url))?;
        self.handles.insert(key, handle);
        self.attached.insert(side, (provider.clone(), handle));
        debug!(pane = %side, provider = %provider, handle = %handle, url, "surface created");
        Ok(Activation::Created(handle))
    }

    fn ensure_parked(
        &mut self,
        host: &mut dyn SurfaceHost,
        side: PaneSide,
        provider: &ProviderId,
        url: &str,
    ) -> Result<Activation, HostError> {
        if let Some((current, handle)) = self.parked.get(&side) {
            if current == provider {
                return Ok(Activation::AlreadyActive(*handle));
            }
        }

        let key = (provider.clone(), side);
        let activation = match self.handles.get(&key) {
            Some(&handle) => Activation::Reattached(handle),
            None => {
                let handle = host.create_or_attach_surface(side, provider, Some(url))?;
                if let Err(e) = host.detach_surface(side, handle) {
                    warn!(pane = %side, error = %e, "failed to hide surface created under overlay");
                }
                self.handles.insert(key, handle);
                Activation::Created(handle)
            }
        };
        self.parked.insert(side, (provider.clone(), activation.handle()));
        Ok(activation)
    }

    /// Detach whatever is shown in `side`. Host errors are logged.
    fn detach_pane(&mut self, host: &mut dyn SurfaceHost, side: PaneSide) {
        if let Some((provider, handle)) = self.attached.remove(&side) {
            if let Err(e) = host.detach_surface(side, handle) {
                warn!(pane = %side, provider = %provider, error = %e, "detach failed");
            }
        }
    }

    /// Hide every attached surface (overlay entered).
    pub fn detach_all(&mut self, host: &mut dyn SurfaceHost) {
        for side in PaneSide::ALL {
            if let Some(entry) = self.attached.get(&side).cloned() {
                self.detach_pane(host, side);
                self.parked.insert(side, entry);
            }
        }
        self.suspended = true;
    }

    /// Show the surfaces hidden by [`detach_all`](Self::detach_all).
    pub fn reattach_all(&mut self, host: &mut dyn SurfaceHost) {
        self.suspended = false;
        for side in PaneSide::ALL {
            let Some((provider, handle)) = self.parked.remove(&side) else {
                continue;
            };
            match host.create_or_attach_surface(side, &provider, None) {
                Ok(attached) => {
                    if attached != handle {
                        self.handles.insert((provider.clone(), side), attached);
                    }
                    self.attached.insert(side, (provider, attached));
                }
                Err(e) => warn!(pane = %side, provider = %provider, error = %e, "reattach failed"),
            }
        }
    }

    /// Forget what `side` shows (pane closing). Surfaces stay resident.
    pub fn release_pane(&mut self, host: &mut dyn SurfaceHost, side: PaneSide) {
        self.parked.remove(&side);
        self.detach_pane(host, side);
    }

    pub fn record_navigation(&mut self, side: PaneSide, provider: &ProviderId, url: &str) {
        self.last_urls
            .insert((provider.clone(), side), url.to_string());
    }

    pub fn last_url(&self, side: PaneSide, provider: &ProviderId) -> Option<&str> {
        self.last_urls
            .get(&(provider.clone(), side))
            .map(String::as_str)
    }

    pub fn handle(&self, side: PaneSide, provider: &ProviderId) -> Option<SurfaceHandle> {
        self.handles.get(&(provider.clone(), side)).copied()
    }

    /// Provider shown in `side`, including one hidden for the overlay.
    pub fn attached_provider(&self, side: PaneSide) -> Option<&ProviderId> {
        self.attached
            .get(&side)
            .or_else(|| self.parked.get(&side))
            .map(|(p, _)| p)
    }

    /// Panes with a visible surface.
    pub fn attached_sides(&self) -> Vec<PaneSide> {
        PaneSide::ALL
            .into_iter()
            .filter(|s| self.attached.contains_key(s))
            .collect()
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Surfaces created this session.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
