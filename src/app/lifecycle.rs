//! Editor lifecycle - construction, the timer task and teardown.

use super::{DividerState, PaneState, PreviewInputs, PreviewState, SplitPaneEditor, SystemState, WindowDragHost};
use crate::config::EditorConfig;
use crate::constants::TICK_INTERVAL;
use crate::input::DragResizeController;
use crate::layout::LayoutStateMachine;
use crate::perf::{FrameMonitor, measure_and_log};
use crate::preview::PreviewSynchronizer;
use crate::types::{EditorEvent, EditorProfile, ViewportClass};
use crate::viewport::ViewportBreakpointMonitor;
use gpui::*;
use std::time::Instant;
use tracing::debug;

impl EventEmitter<EditorEvent> for SplitPaneEditor {}

impl SplitPaneEditor {
    pub fn new(
        content: AnyView,
        profile: EditorProfile,
        config: EditorConfig,
        inputs: PreviewInputs,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let mut viewport = ViewportBreakpointMonitor::new(config.breakpoint());
        let class = viewport.activate(Some(f32::from(window.viewport_size().width)));

        let default_width = config.default_width(profile);
        let machine = LayoutStateMachine::new(default_width, class, config.mode_widths());
        let sync = PreviewSynchronizer::new(
            inputs.base_url,
            inputs.settings,
            inputs.override_url,
            config.sync_timing(),
            Instant::now(),
        );

        let viewport_subscription =
            cx.observe_window_bounds(window, |this, window, cx| this.on_viewport_changed(window, cx));
        let tick_task = Self::spawn_tick(window, cx);
        cx.on_release(|this, cx| this.teardown(cx)).detach();

        debug!(?profile, ?class, default_width, "Split pane editor created");

        Self {
            content,
            profile,
            pane: PaneState { machine, viewport },
            divider: DividerState {
                controller: DragResizeController::new(config.drag_bounds()),
                host: WindowDragHost::default(),
                default_width,
            },
            preview: PreviewState {
                sync,
                surface: None,
                shown_generation: 0,
                surface_failed: false,
                refresh_key: 0,
            },
            system: SystemState {
                tick_task: Some(tick_task),
                viewport_subscription: Some(viewport_subscription),
                config_watcher: None,
                frame_monitor: FrameMonitor::new(),
                torn_down: false,
            },
            config,
        }
    }

    /// One timer task per editor. Dropping the task (teardown or drop)
    /// cancels it. It wakes every `TICK_INTERVAL` for load reports and config
    /// edits, and earlier when the synchronizer has a deadline due sooner.
    fn spawn_tick(window: &Window, cx: &mut Context<Self>) -> Task<()> {
        cx.spawn_in(window, async move |this, cx| {
            loop {
                let Ok(delay) = this.update(cx, |this, _| {
                    this.preview.sync.poll_delay(Instant::now(), TICK_INTERVAL)
                }) else {
                    break;
                };
                cx.background_executor().timer(delay).await;
                if this.update_in(cx, |this, window, cx| this.tick(window, cx)).is_err() {
                    break;
                }
            }
        })
    }

    /// Commit due base URL changes, collect load reports, expire stuck loads
    /// and pick up config edits.
    pub(crate) fn tick(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.system.torn_down {
            return;
        }
        let now = Instant::now();

        let mut changed = measure_and_log("preview_poll", 2.0, || self.preview.sync.poll(now));
        changed |= self.drain_surface_loads();
        changed |= self.preview.sync.check_load_timeout(now);
        changed |= self.check_config_reload(cx);

        if changed {
            self.sync_surface(window, cx);
            cx.notify();
        }
    }

    /// Viewport resized; re-layout only when it crossed the breakpoint.
    pub(crate) fn on_viewport_changed(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let width = f32::from(window.viewport_size().width);
        if let Some(class) = self.pane.viewport.observe(Some(width)) {
            self.apply_breakpoint(class, cx);
        }
    }

    /// Move the layout to a new viewport class.
    pub(crate) fn apply_breakpoint(&mut self, class: ViewportClass, cx: &mut Context<Self>) {
        if class.is_mobile() {
            // A drag cannot survive the switch to the overlay layout.
            self.finish_drag(cx);
        }
        let events = self.pane.machine.on_breakpoint(class);
        self.emit_events(events, cx);
        self.update_surface_visibility(cx);
    }

    pub(crate) fn emit_events(&mut self, events: Vec<EditorEvent>, cx: &mut Context<Self>) {
        for event in events {
            cx.emit(event);
        }
        cx.notify();
    }

    /// Release everything the editor holds: an active drag, the pending base
    /// URL window, the timer task, the viewport subscription and the surface.
    ///
    /// Runs automatically when the entity is released; calling it again is a
    /// no-op.
    pub fn teardown(&mut self, cx: &mut App) {
        if self.system.torn_down {
            return;
        }
        self.system.torn_down = true;

        self.divider.controller.end_drag(&mut self.divider.host);
        self.divider.host.frame_requests.clear();
        self.pane.machine.set_dragging(false);
        self.pane.viewport.deactivate();
        self.preview.sync.teardown();

        self.system.tick_task = None;
        self.system.viewport_subscription = None;
        self.system.config_watcher = None;

        if let Some(surface) = self.preview.surface.take() {
            surface.hide(cx);
        }
        debug!(profile = ?self.profile, "Split pane editor torn down");
    }

    pub fn is_torn_down(&self) -> bool {
        self.system.torn_down
    }
}
