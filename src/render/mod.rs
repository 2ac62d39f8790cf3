//! Rendering for the split-pane editor.
//!
//! ## Modules
//!
//! - `divider` - Drag handle, collapse button, drag shield
//! - `preview` - Preview header and surface states
//! - `overlay` - Mobile content overlay
//!
//! The render pass is also where the preview surface is brought in line with
//! the synchronizer, since creating the webview needs the window.

mod divider;
mod overlay;
mod preview;

use crate::app::SplitPaneEditor;
use crate::layout::PaneLayout;
use crate::profile_scope;
use divider::{render_divider, render_drag_shield};
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::ActiveTheme as _;
use overlay::{render_mobile_overlay, render_overlay_opener};
use preview::{PreviewView, render_preview_pane};
use tracing::trace;

impl Render for SplitPaneEditor {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        profile_scope!("render_split_pane_editor");

        self.sync_surface(window, cx);

        let layout = self.pane.machine.layout();
        let snapshot = self.pane.machine.snapshot();
        let listening = self.divider.host.listening;
        let bg = cx.theme().background;
        let fg = cx.theme().foreground;

        let preview = PreviewView {
            locator: self.preview.sync.locator().as_str().map(|s| SharedString::from(s.to_string())),
            state: self.preview.sync.surface(),
            mode: snapshot.preview_mode,
            surface: self.preview.surface.as_ref().map(|s| s.webview_entity.clone()),
        };

        // Container width for the drag math, measured after layout
        let this = cx.entity().downgrade();
        let measure = canvas(
            move |bounds, _window, cx| {
                let width = f32::from(bounds.size.width);
                if this
                    .update(cx, |this, _| this.divider.host.container_width = width)
                    .is_err()
                {
                    trace!(width, "Container width dropped: editor released");
                }
            },
            |_, _, _, _| {},
        )
        .absolute()
        .size_full();

        let root = div()
            .id("split-pane-editor")
            .relative()
            .size_full()
            .flex()
            .flex_row()
            .overflow_hidden()
            .bg(bg)
            .text_color(fg)
            .child(measure);

        let root = match layout {
            PaneLayout::Expanded { width } => root
                .child(
                    div()
                        .flex_none()
                        .h_full()
                        .w(relative(width / 100.0))
                        .overflow_hidden()
                        .child(self.content.clone()),
                )
                .child(render_divider(false, snapshot.is_dragging, cx))
                .child(render_preview_pane(preview, cx)),
            PaneLayout::Collapsed => root
                .child(render_divider(true, false, cx))
                .child(render_preview_pane(preview, cx)),
            PaneLayout::MobileOverlay { open } => {
                let root = root.child(render_preview_pane(preview, cx));
                if open {
                    root.child(render_mobile_overlay(self.content.clone(), cx))
                } else {
                    root.child(render_overlay_opener(cx))
                }
            }
        };

        root.when(listening, |d| d.child(render_drag_shield(cx)))
    }
}
