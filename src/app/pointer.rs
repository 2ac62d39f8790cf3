//! Divider pointer handling - drag, frame commits, double-click reset.
//!
//! ## Performance Notes
//!
//! Mouse move fires far more often than frames are painted. The handler only
//! feeds the drag controller; layout changes happen in `commit_drag_frame`,
//! at most once per frame.

use super::SplitPaneEditor;
use crate::input::FrameToken;
use crate::profile_scope;
use gpui::*;
use std::time::Instant;

impl SplitPaneEditor {
    pub(crate) fn on_divider_mouse_down(
        &mut self,
        event: &MouseDownEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if event.click_count >= 2 {
            self.reset_width(cx);
            return;
        }

        if self.divider.host.container_width <= 0.0 {
            self.divider.host.container_width = f32::from(window.viewport_size().width);
        }
        let snapshot = self.pane.machine.snapshot();
        let started = self.divider.controller.begin_drag(
            f32::from(event.position.x),
            snapshot.pane_width_percent,
            &snapshot,
            &mut self.divider.host,
        );
        if started {
            self.pane.machine.set_dragging(true);
            self.system.frame_monitor.reset();
            self.update_surface_visibility(cx);
            cx.stop_propagation();
            cx.notify();
        }
    }

    pub(crate) fn on_drag_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        profile_scope!("editor_drag_mouse_move");

        if !self.divider.controller.is_dragging() {
            return;
        }
        self.divider
            .controller
            .on_pointer_move(f32::from(event.position.x), &mut self.divider.host);
        self.flush_frame_requests(window, cx);
    }

    pub(crate) fn on_drag_mouse_up(
        &mut self,
        _event: &MouseUpEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.finish_drag(cx);
    }

    fn flush_frame_requests(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        for token in self.divider.host.frame_requests.drain(..) {
            cx.on_next_frame(window, move |this, window, cx| {
                this.commit_drag_frame(token, window, cx)
            });
        }
    }

    fn commit_drag_frame(&mut self, token: FrameToken, _window: &mut Window, cx: &mut Context<Self>) {
        let Some(width) = self.divider.controller.on_animation_frame(token) else {
            return;
        };
        self.system.frame_monitor.record_commit(Instant::now());
        let events = self.pane.machine.resize(width);
        self.emit_events(events, cx);
    }

    /// End the drag, if any, and restore the surface.
    pub(crate) fn finish_drag(&mut self, cx: &mut Context<Self>) {
        if !self.divider.controller.is_dragging() && !self.divider.host.listening {
            return;
        }
        self.divider.controller.end_drag(&mut self.divider.host);
        self.pane.machine.set_dragging(false);
        self.system.frame_monitor.finish();
        self.update_surface_visibility(cx);
        cx.notify();
    }
}
