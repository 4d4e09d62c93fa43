use std::fmt;

use trio_common::{HostError, PaneSide, ProviderId, Rect};

/// Opaque identifier of a native surface, issued by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceHandle(pub u64);

impl fmt::Display for SurfaceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}

/// Native capability that owns the actual content surfaces.
///
/// Surfaces are keyed by `(provider, side)`; the host never destroys one
/// during a session. Every method is fire-and-forget from the caller's
/// point of view: no method waits for page loads.
pub trait SurfaceHost {
    /// Show the surface for `(provider, side)` in the pane, creating it and
    /// loading `url` if none exists. With `url == None` an existing surface
    /// is attached without navigating.
    fn create_or_attach_surface(
        &mut self,
        side: PaneSide,
        provider: &ProviderId,
        url: Option<&str>,
    ) -> Result<SurfaceHandle, HostError>;

    /// Hide `handle` from the pane. The surface stays resident.
    fn detach_surface(&mut self, side: PaneSide, handle: SurfaceHandle) -> Result<(), HostError>;

    /// Move the surface attached to `side` to `rect`.
    fn resize_surface(&mut self, side: PaneSide, rect: Rect) -> Result<(), HostError>;

    /// Give keyboard focus to the surface attached to `side`.
    fn set_focus(&mut self, side: PaneSide) -> Result<(), HostError>;

    /// An overlay panel is now covering the panes.
    fn enter_overlay(&mut self) -> Result<(), HostError>;

    /// The last overlay panel closed.
    fn exit_overlay(&mut self) -> Result<(), HostError>;
}
