//! Editor state - the SplitPaneEditor struct definition and sub-structs.

use crate::config::EditorConfig;
use crate::config_watcher::ConfigWatcher;
use crate::input::{DragHost, DragResizeController, FrameToken};
use crate::layout::LayoutStateMachine;
use crate::perf::FrameMonitor;
use crate::preview::PreviewSynchronizer;
use crate::types::EditorProfile;
use crate::viewport::ViewportBreakpointMonitor;
use crate::webviews::PreviewSurface;
use gpui::*;

/// Split-pane editor with a live preview.
///
/// The left pane hosts arbitrary caller content; the right pane hosts the
/// preview surface. All behavior lives in the headless state machines held by
/// the sub-structs; this view wires them to gpui.
pub struct SplitPaneEditor {
    pub(crate) content: AnyView,
    pub(crate) profile: EditorProfile,
    pub(crate) config: EditorConfig,
    pub(crate) pane: PaneState,
    pub(crate) divider: DividerState,
    pub(crate) preview: PreviewState,
    pub(crate) system: SystemState,
}

// =============================================================================
// Sub-structs
// =============================================================================

/// Pane layout and viewport classification
pub struct PaneState {
    pub machine: LayoutStateMachine,
    pub viewport: ViewportBreakpointMonitor,
}

/// Divider drag
pub struct DividerState {
    pub controller: DragResizeController,
    pub host: WindowDragHost,
    /// Double-click target width
    pub default_width: f32,
}

/// Preview pipeline and the surface it drives
pub struct PreviewState {
    pub sync: PreviewSynchronizer,
    pub surface: Option<PreviewSurface>,
    /// Generation last handed to the surface
    pub shown_generation: u64,
    /// The surface could not be created; do not retry
    pub surface_failed: bool,
    pub refresh_key: u64,
}

/// Subscriptions, timers and diagnostics
pub struct SystemState {
    pub tick_task: Option<Task<()>>,
    pub viewport_subscription: Option<Subscription>,
    pub config_watcher: Option<ConfigWatcher>,
    pub frame_monitor: FrameMonitor,
    pub torn_down: bool,
}

// =============================================================================
// Drag host
// =============================================================================

/// `DragHost` over the editor's window.
///
/// The controller runs inside gpui listeners that cannot schedule frames
/// themselves, so requests are queued here and flushed by the editor right
/// after the controller call. "Listeners" are the drag shield's mouse handlers,
/// which the render pass attaches while `listening` is set.
#[derive(Debug, Default)]
pub struct WindowDragHost {
    pub container_width: f32,
    pub listening: bool,
    pub frame_requests: Vec<FrameToken>,
}

impl DragHost for WindowDragHost {
    fn container_width(&self) -> f32 {
        self.container_width
    }

    fn install_pointer_listeners(&mut self) {
        self.listening = true;
    }

    fn remove_pointer_listeners(&mut self) {
        self.listening = false;
    }

    fn request_frame(&mut self, token: FrameToken) {
        self.frame_requests.push(token);
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        // gpui frame callbacks cannot be revoked; the controller drops the
        // stale token when it fires.
        self.frame_requests.retain(|queued| *queued != token);
    }
}
