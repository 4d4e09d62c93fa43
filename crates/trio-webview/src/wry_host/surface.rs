use wry::WebView;

use crate::host::SurfaceHandle;

/// One resident webview.
pub(super) struct Surface {
    pub(super) handle: SurfaceHandle,
    pub(super) webview: WebView,
    pub(super) visible: bool,
}

impl Surface {
    pub(super) fn set_visible(&mut self, visible: bool) -> Result<(), wry::Error> {
        if self.visible != visible {
            self.webview.set_visible(visible)?;
            self.visible = visible;
        }
        Ok(())
    }

    pub(super) fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    pub(super) fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }

    pub(super) fn focus_parent(&self) -> Result<(), wry::Error> {
        self.webview.focus_parent()
    }
}
