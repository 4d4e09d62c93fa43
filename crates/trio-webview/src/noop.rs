//! In-memory host for headless runs and tests.

use std::collections::HashMap;

use trio_common::{HostError, PaneSide, ProviderId, Rect};

use crate::host::{SurfaceHandle, SurfaceHost};

/// One call received by [`NoopHost`].
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Create {
        side: PaneSide,
        provider: ProviderId,
        url: String,
    },
    Attach {
        side: PaneSide,
        provider: ProviderId,
    },
    Detach {
        side: PaneSide,
        handle: SurfaceHandle,
    },
    Resize {
        side: PaneSide,
        rect: Rect,
    },
    Focus(PaneSide),
    EnterOverlay,
    ExitOverlay,
}

/// Issues sequential handles and records every call. `fail_creates` makes
/// surface creation fail, for exercising retry paths.
#[derive(Debug, Default)]
pub struct NoopHost {
    pub calls: Vec<HostCall>,
    pub fail_creates: bool,
    surfaces: HashMap<(ProviderId, PaneSide), SurfaceHandle>,
    next_handle: u64,
}

impl NoopHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of surfaces created over the session.
    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    pub fn creates(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, HostCall::Create { .. }))
            .count()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl SurfaceHost for NoopHost {
    fn create_or_attach_surface(
        &mut self,
        side: PaneSide,
        provider: &ProviderId,
        url: Option<&str>,
    ) -> Result<SurfaceHandle, HostError> {
        let key = (provider.clone(), side);
        if let Some(handle) = self.surfaces.get(&key) {
            self.calls.push(HostCall::Attach {
                side,
                provider: provider.clone(),
            });
            return Ok(*handle);
        }

        if self.fail_creates {
            return Err(HostError::SurfaceCreation {
                pane: side.to_string(),
                provider: provider.to_string(),
                reason: "creation disabled".into(),
            });
        }
        let url = url.ok_or_else(|| HostError::NoSurface(side.to_string()))?;

        self.next_handle += 1;
        let handle = SurfaceHandle(self.next_handle);
        self.surfaces.insert(key, handle);
        self.calls.push(HostCall::Create {
            side,
            provider: provider.clone(),
            url: url.to_string(),
        });
        Ok(handle)
    }

    fn detach_surface(&mut self, side: PaneSide, handle: SurfaceHandle) -> Result<(), HostError> {
        self.calls.push(HostCall::Detach { side, handle });
        Ok(())
    }

    fn resize_surface(&mut self, side: PaneSide, rect: Rect) -> Result<(), HostError> {
        self.calls.push(HostCall::Resize { side, rect });
        Ok(())
    }

    fn set_focus(&mut self, side: PaneSide) -> Result<(), HostError> {
        self.calls.push(HostCall::Focus(side));
        Ok(())
    }

    fn enter_overlay(&mut self) -> Result<(), HostError> {
        self.calls.push(HostCall::EnterOverlay);
        Ok(())
    }

    fn exit_overlay(&mut self) -> Result<(), HostError> {
        self.calls.push(HostCall::ExitOverlay);
        Ok(())
    }
}
