//! Preview surface management - creation, navigation, visibility and load
//! reports.
//!
//! The native webview paints above gpui content, so it is hidden whenever
//! something has to be drawn over it: the placeholder and unavailable states,
//! the mobile content overlay, and the drag shield (the webview would
//! otherwise swallow the pointer moves of a drag crossing it).

use super::SplitPaneEditor;
use crate::preview::SurfaceState;
use crate::webviews::PreviewSurface;
use gpui::*;
use tracing::{debug, error};

impl SplitPaneEditor {
    /// Bring the surface in line with the synchronizer: create it on first
    /// use, navigate on every new generation.
    pub(crate) fn sync_surface(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let generation = self.preview.sync.generation();
        let locator = self
            .preview
            .sync
            .locator()
            .as_str()
            .filter(|_| generation != self.preview.shown_generation)
            .map(str::to_string);

        if let Some(url) = locator {
            self.preview.shown_generation = generation;
            match self.preview.surface.as_mut() {
                Some(surface) => surface.navigate(&url, generation, cx),
                None if !self.preview.surface_failed => {
                    match PreviewSurface::new(&url, generation, window, cx) {
                        Ok(surface) => {
                            debug!(%url, generation, "Preview surface created");
                            self.preview.surface = Some(surface);
                        }
                        Err(e) => {
                            error!(%url, error = %e, "Failed to create preview surface");
                            self.preview.surface_failed = true;
                        }
                    }
                }
                None => {}
            }
        }

        if self.preview.surface_failed {
            self.preview.sync.mark_unavailable();
        }
        self.update_surface_visibility(cx);
    }

    /// Show the webview only when nothing is drawn over it.
    pub(crate) fn update_surface_visibility(&mut self, cx: &mut App) {
        let Some(surface) = self.preview.surface.as_ref() else {
            return;
        };
        let layout = self.pane.machine.snapshot();
        let covered = layout.is_dragging || (layout.is_mobile && layout.overlay_open);
        let has_content = matches!(
            self.preview.sync.surface(),
            SurfaceState::Loading | SurfaceState::Ready
        );

        if has_content && !covered {
            surface.show(cx);
        } else {
            surface.hide(cx);
        }
    }

    /// Feed finished loads to the synchronizer. Returns whether the surface
    /// state changed.
    pub(crate) fn drain_surface_loads(&mut self) -> bool {
        let Some(generation) = self.preview.surface.as_ref().and_then(|s| s.take_loaded()) else {
            return false;
        };
        self.preview.sync.on_surface_loaded(generation)
    }
}
